use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use greetfile::config::{AppState, Config};
use greetfile::logger;
use greetfile::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    // Build the Tokio runtime; worker count follows the config
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_listener(addr)?;

    // Bootstraps the data directory on startup
    let state = Arc::new(AppState::new(cfg)?);
    let connections = Arc::new(AtomicUsize::new(0));

    logger::log_server_start(&addr, &state.config, state.storage.root());

    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                server::accept_connection(stream, peer_addr, &state, &connections);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
