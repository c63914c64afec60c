mod bot;
mod cli;
mod config;
mod error;
mod model;
mod service;
mod startup;

use clap::Parser;
use dioxus_logger::tracing;

use crate::{
    bot::command::CommandRouter,
    cli::Args,
    config::Config,
    error::AppError,
    service::{ask::AskService, backend::BackendClient},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    startup::init_logger(args.dev)?;

    dotenvy::dotenv().ok();
    let config = Config::from_env(args.dev)?;

    let http_client = startup::setup_reqwest_client(&config)?;
    let backend = BackendClient::new(http_client, config.backend_url.clone());
    let ask_service = AskService::new(backend, config.maintainer_id);
    let router = CommandRouter::from_config(&config, ask_service);

    tracing::info!(
        "Starting bot for {} guild(s) with commands {:?} against backend {}",
        config.guild_ids.len(),
        router.names(),
        config.backend_url
    );

    let client = bot::start::init_bot(&config, router).await?;
    bot::start::start_bot(client).await
}
