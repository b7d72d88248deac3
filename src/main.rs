use anyhow::Result;
use freetime::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
