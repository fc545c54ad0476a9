mod cli;
mod infra;
mod preview;
mod routes;
mod server;

use folio::error::AppError;
use std::process::ExitCode;

pub async fn run() -> Result<ExitCode, AppError> {
    cli::run().await
}
