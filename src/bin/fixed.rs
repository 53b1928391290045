use log::{error, info};

use hello_bench::config::ServerConfig;
use hello_bench::core::runtime::WorkerRuntime;
use hello_bench::core::server;
use hello_bench::error::Result;

fn main() {
    // Initialize logging
    env_logger::init();

    // The fixed variant embeds its worker count; there is nothing to parse
    let config = ServerConfig::fixed();

    if let Err(e) = serve(config) {
        error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

fn serve(config: ServerConfig) -> Result<()> {
    info!(
        "Configuration: host={}, port={}, workers={}",
        config.host, config.port, config.worker_count
    );

    let runtime = WorkerRuntime::from_config(&config)?;
    runtime.block_on(server::run(&config))
}
