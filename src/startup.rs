use dioxus_logger::tracing::Level;

use crate::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// Dev mode logs at `DEBUG`, which includes question text; otherwise `INFO`.
pub fn init_logger(dev: bool) -> Result<(), AppError> {
    let level = if dev { Level::DEBUG } else { Level::INFO };

    dioxus_logger::init(level).map_err(|e| AppError::LoggerErr(e.to_string()))
}

/// Builds the HTTP client used for backend requests.
///
/// The timeout covers the whole request including the body, so a hung backend
/// cannot hold an invocation open indefinitely.
///
/// # Arguments
/// - `config` - Application configuration containing the backend timeout
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(config.backend_timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}
