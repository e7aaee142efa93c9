use hr_server::{Server, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. dotenv, configuration, logging
    let config = setup_environment();

    tracing::info!("HR server starting...");

    // 2. Open the database and serve until shutdown
    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
