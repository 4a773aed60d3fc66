use kernel::model::notification::{Notification, TemplateKey};
use shared::config::MailConfig;

/// Best-effort templated-mail dispatcher. Failures are logged and swallowed;
/// nothing in the enrollment workflow ever waits on or fails because of a
/// mail send.
#[derive(Clone)]
pub struct MailNotifier {
    client: reqwest::Client,
    config: MailConfig,
}

impl MailNotifier {
    pub fn new(config: MailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Fire and forget: hands the notification to a background task and
    /// returns immediately.
    pub fn dispatch(&self, notification: Notification) {
        let this = self.clone();
        tokio::spawn(async move {
            this.send(notification).await;
        });
    }

    async fn send(&self, notification: Notification) {
        let Some(template_id) = self.template_id(notification.template) else {
            tracing::info!(
                template = ?notification.template,
                "mail skipped, no template configured for this event type"
            );
            return;
        };

        let mut params = notification.params.clone();
        params.insert("to_name".into(), notification.recipient_name.clone());
        params.insert("to_email".into(), notification.recipient_email.clone());

        let body = serde_json::json!({
            "service_id": self.config.service_id,
            "template_id": template_id,
            "user_id": self.config.public_key,
            "template_params": params,
        });

        let res = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await;

        match res {
            Ok(res) if res.status().is_success() => {
                tracing::info!(template_id, "mail sent");
            }
            Ok(res) => {
                tracing::warn!(
                    template_id,
                    status = %res.status(),
                    "mail provider rejected the send"
                );
            }
            Err(e) => {
                tracing::warn!(template_id, error = %e, "mail send failed");
            }
        }
    }

    fn template_id(&self, key: TemplateKey) -> Option<&str> {
        match key {
            TemplateKey::Enrolled => self.config.enrolled_template.as_deref(),
            TemplateKey::Unenrolled => self.config.unenrolled_template.as_deref(),
            // No templates configured for these on the current mail plan.
            TemplateKey::EventCreated | TemplateKey::EventDeleted => None,
        }
    }
}
