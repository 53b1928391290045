use clap::Parser;
use log::{error, info};

use hello_bench::config::ServerConfig;
use hello_bench::core::runtime::WorkerRuntime;
use hello_bench::core::server;
use hello_bench::error::Result;

/// Command-line options for the flag-configured benchmark variant
#[derive(Parser, Debug)]
#[command(name = "hello_bench")]
struct Opt {
    /// Number of workers used by the runtime. Must be a positive integer.
    #[arg(long = "worker_count", allow_negative_numbers = true)]
    worker_count: i64,
}

fn main() {
    // Initialize logging
    env_logger::init();

    let opt = Opt::parse();

    if let Err(e) = serve(opt) {
        error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

// Validate configuration, size the runtime, then serve forever
fn serve(opt: Opt) -> Result<()> {
    let config = ServerConfig::with_worker_count(opt.worker_count)?;

    // The benchmark driver reads the selected count from stdout
    println!("Using {} workers.", config.worker_count);

    info!(
        "Configuration: host={}, port={}, workers={}",
        config.host, config.port, config.worker_count
    );

    let runtime = WorkerRuntime::from_config(&config)?;
    runtime.block_on(server::run(&config))
}
