mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use country_matcher::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
