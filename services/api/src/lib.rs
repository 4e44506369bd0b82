mod cli;
mod demo;
mod infra;
mod page;
mod routes;
mod server;

use hiring_cost::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
