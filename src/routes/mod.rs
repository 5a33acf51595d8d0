use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use portfolio_contact::{LoggingNotifier, Notifier};
use portfolio_notification::{EmailNotifier, EmailSender, SendGridSender, SmtpSender};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::config::{Config, EmailProvider, NotifierMode};

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub contact_command: portfolio_contact::Command,
    pub static_dir: PathBuf,
}

impl AppState {
    /// Builds the notifier chosen by configuration. Provider clients are
    /// constructed here, once, and injected into the contact handler.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let notifier: Arc<dyn Notifier> = match config.notifier.mode {
            NotifierMode::Log => {
                tracing::info!("Contact submissions will be logged only");
                Arc::new(LoggingNotifier::new(&config.email.owner_address))
            }
            NotifierMode::Email => {
                let sender: Arc<dyn EmailSender> = match config.email.provider {
                    EmailProvider::Sendgrid => {
                        let endpoint: Option<url::Url> = config
                            .email
                            .api_url
                            .as_deref()
                            .map(str::parse)
                            .transpose()
                            .context("Invalid email.api_url")?;
                        Arc::new(SendGridSender::new(&config.email.api_key, endpoint)?)
                    }
                    EmailProvider::Smtp => Arc::new(SmtpSender::new(
                        &config.email.smtp_host,
                        config.email.smtp_port,
                        &config.email.smtp_username,
                        &config.email.smtp_password,
                    )?),
                };

                tracing::info!(
                    provider = ?config.email.provider,
                    owner = %config.email.owner_address,
                    "Contact submissions will be emailed"
                );

                Arc::new(EmailNotifier::new(
                    sender,
                    &config.email.owner_address,
                    &config.email.from_address,
                ))
            }
        };

        Ok(Self {
            contact_command: portfolio_contact::Command(notifier),
            static_dir: PathBuf::from(&config.server.static_dir),
        })
    }
}

pub fn router(app_state: AppState) -> Router {
    let static_files = ServeDir::new(&app_state.static_dir);

    Router::new()
        .route("/health", get(health::health))
        .route("/send-email", post(contact::action))
        .fallback_service(static_files)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
}
