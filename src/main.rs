use saldo::{api, config::Config, CsvEntrySource, DemoDataSource, EntrySource, FallbackSource};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let ctx = match config.decimal_context() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let source: Arc<dyn EntrySource> = match &config.demo_data_path {
        Some(path) => {
            tracing::info!("Serving summary entries from {}", path.display());
            Arc::new(FallbackSource::new(Arc::new(CsvEntrySource::new(path))))
        }
        None => {
            tracing::info!("No DEMO_DATA_PATH set, serving built-in demo entries");
            Arc::new(DemoDataSource::new())
        }
    };

    let app = api::create_router(api::AppState::new(ctx, source));

    // Bind to address
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        precision = ctx.precision(),
        "Server listening on {}",
        addr
    );

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
