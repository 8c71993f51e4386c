//! Order notification dispatch
//!
//! Fire-and-forget email notifications routed through an HTTP mail relay.
//! Callers treat every failure as non-fatal: a flaky relay must never block
//! or roll back an order write, so errors are logged and swallowed at the
//! call site.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::Config;
use crate::db::models::Order;

/// Notification errors, logged by callers and never propagated to clients
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("mail relay error: {0}")]
    Relay(String),
}

/// Order notification sink
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Order confirmation for the buyer
    async fn notify_buyer(
        &self,
        order: &Order,
        listing_title: &str,
        email: &str,
    ) -> Result<(), NotifyError>;

    /// New-order alert for the seller
    async fn notify_seller(
        &self,
        order: &Order,
        listing_title: &str,
        email: &str,
    ) -> Result<(), NotifyError>;

    /// Status-change update for the buyer
    async fn notify_status_change(
        &self,
        order: &Order,
        listing_title: &str,
        email: &str,
    ) -> Result<(), NotifyError>;
}

/// Notifier posting JSON messages to a configurable mail relay endpoint
///
/// When no relay is configured the service degrades to a logged no-op, so
/// development setups work without any mail infrastructure.
#[derive(Clone)]
pub struct MailRelayNotifier {
    client: reqwest::Client,
    relay_url: Option<String>,
    from: String,
}

impl MailRelayNotifier {
    pub fn from_config(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            relay_url: config.mail_relay_url.clone(),
            from: config.mail_from.clone(),
        }
    }

    /// A notifier with no relay configured (tests, local development)
    pub fn disabled() -> Self {
        Self {
            client: reqwest::Client::new(),
            relay_url: None,
            from: "no-reply@fripe.tn".to_string(),
        }
    }

    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), NotifyError> {
        let Some(url) = &self.relay_url else {
            tracing::warn!(to, subject, "mail relay not configured, email not sent");
            return Ok(());
        };

        let payload = serde_json::json!({
            "from": self.from,
            "to": to,
            "subject": subject,
            "html": html,
        });

        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::Relay(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotifyError::Relay(format!(
                "relay returned {}",
                response.status()
            )));
        }

        tracing::debug!(to, subject, "notification email dispatched");
        Ok(())
    }
}

#[async_trait]
impl Notifier for MailRelayNotifier {
    async fn notify_buyer(
        &self,
        order: &Order,
        listing_title: &str,
        email: &str,
    ) -> Result<(), NotifyError> {
        let subject = format!("Confirmation de commande - {listing_title}");
        self.send(email, &subject, &order_summary_html(order, listing_title))
            .await
    }

    async fn notify_seller(
        &self,
        order: &Order,
        listing_title: &str,
        email: &str,
    ) -> Result<(), NotifyError> {
        let subject = format!("Nouvelle commande reçue - {listing_title}");
        self.send(email, &subject, &order_summary_html(order, listing_title))
            .await
    }

    async fn notify_status_change(
        &self,
        order: &Order,
        listing_title: &str,
        email: &str,
    ) -> Result<(), NotifyError> {
        let subject = format!("Mise à jour de votre commande - {listing_title}");
        self.send(email, &subject, &order_summary_html(order, listing_title))
            .await
    }
}

/// French order summary shared by every notification template
fn order_summary_html(order: &Order, listing_title: &str) -> String {
    use shared::order::ReceptionMode;

    let mut html = format!(
        "<h2>Commande #{}</h2>\
         <p><strong>Produit :</strong> {}</p>\
         <p><strong>Quantité :</strong> {}</p>\
         <p><strong>Couleur :</strong> {}</p>\
         <p><strong>Taille :</strong> {}</p>\
         <p><strong>Mode de réception :</strong> {}</p>",
        order.id,
        listing_title,
        order.quantity,
        order.color.as_deref().unwrap_or("Non précisé"),
        order.size.as_deref().unwrap_or("Non précisé"),
        order.reception_mode,
    );

    if order.reception_mode == ReceptionMode::Livraison {
        html.push_str(&format!(
            "<p><strong>Adresse :</strong> {}</p>\
             <p><strong>Téléphone :</strong> {}</p>",
            order.shipping_address.as_deref().unwrap_or(""),
            order.phone.as_deref().unwrap_or(""),
        ));
    }

    html.push_str(&format!(
        "<p><strong>Total :</strong> {:.2} TND</p>\
         <p>Statut : {}</p>",
        order.total_amount, order.status,
    ));

    html
}
