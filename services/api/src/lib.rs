mod cli;
mod infra;
mod recommend;
mod routes;
mod server;

use ps_recommender::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
