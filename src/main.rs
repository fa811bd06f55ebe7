use clap::Parser;
use countrysrv::{
    api::{self, AppState},
    cli::Args,
    config::Config,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let repository = Arc::new(args.repository(&config));

    // Warm the cache so a missing or malformed catalog fails at startup
    // instead of on the first request.
    match repository.all_countries().await {
        Ok(countries) => println!("Country catalog ready ({} entries)", countries.len()),
        Err(e) => {
            eprintln!("Failed to load country catalog: {}", e);
            std::process::exit(1);
        }
    }

    let app_state = AppState {
        config: config.clone(),
        repository: repository.clone(),
    };

    let app = api::router(app_state);

    let server_port = args.server_port(&config);
    let listener = TcpListener::bind(&format!("0.0.0.0:{}", server_port))
        .await
        .unwrap();

    println!("Server listening on http://0.0.0.0:{}", server_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    println!("Signal received, starting graceful shutdown");
}
