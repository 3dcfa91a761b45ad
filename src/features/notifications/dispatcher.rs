use crate::features::notifications::models::NotificationStatus;
use crate::features::notifications::templates;
use crate::shared::config::environment::EmailConfig;
use crate::shared::errors::{AppError, AppResult};
use chrono::Utc;
use chrono_tz::Europe::Stockholm;
use log::{info, warn};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

/// EmailJS notification dispatcher
///
/// One send per trigger. Errors are handled at this boundary and only
/// reported as a status; a lost notification is accepted.
pub struct EmailDispatcher {
    client: Client,
    config: EmailConfig,
}

impl EmailDispatcher {
    /// Build a dispatcher from the environment configuration
    pub fn new() -> AppResult<Self> {
        Self::with_config(EmailConfig::from_env()?)
    }

    /// Build a dispatcher with an explicit configuration
    pub fn with_config(config: EmailConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::configuration(format!("HTTP client init failed: {e}")))?;

        Ok(Self { client, config })
    }

    /// Notification timestamp in local wall-clock form
    fn local_timestamp() -> String {
        Utc::now()
            .with_timezone(&Stockholm)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }

    /// Send one email through the EmailJS REST API
    async fn send(&self, template_params: Value) -> AppResult<()> {
        let body = json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": template_params,
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::external_service("EmailJS".to_string(), e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(
                "EmailJS".to_string(),
                format!("HTTP {status}: {text}"),
            ));
        }

        Ok(())
    }

    /// Notify that a cleaning was logged
    ///
    /// Never fails; a send error is logged and reported as `Failed`.
    pub async fn notify_cleaning_logged(
        &self,
        cleaner_name: &str,
        machine_name: &str,
        machine_location: &str,
        payment_rate: f64,
    ) -> NotificationStatus {
        let timestamp = Self::local_timestamp();
        let params = templates::cleaning_logged_params(
            &self.config.to_email,
            cleaner_name,
            machine_name,
            machine_location,
            payment_rate,
            &timestamp,
        );

        match self.send(params).await {
            Ok(()) => {
                info!("cleaning notification sent: cleaner={cleaner_name} machine={machine_name}");
                NotificationStatus::Sent
            }
            Err(e) => {
                warn!("cleaning notification failed: {}", e.details());
                NotificationStatus::Failed
            }
        }
    }

    /// Notify that a payment was processed
    ///
    /// Never fails; a send error is logged and reported as `Failed`.
    pub async fn notify_payment_processed(
        &self,
        paid_by: &str,
        total_amount: f64,
        cleaning_count: usize,
        cleaners: &[String],
    ) -> NotificationStatus {
        let timestamp = Self::local_timestamp();
        let params = templates::payment_processed_params(
            &self.config.to_email,
            paid_by,
            total_amount,
            cleaning_count,
            cleaners,
            &timestamp,
        );

        match self.send(params).await {
            Ok(()) => {
                info!("payment notification sent: total={total_amount} SEK paid_by={paid_by}");
                NotificationStatus::Sent
            }
            Err(e) => {
                warn!("payment notification failed: {}", e.details());
                NotificationStatus::Failed
            }
        }
    }
}
