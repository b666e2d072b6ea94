//! Stub Users API server binary

use clap::Parser;
use restprobe::http::server::start_server;

#[derive(Parser)]
#[command(name = "server")]
#[command(about = "Stub Users API server")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() {
    restprobe::telemetry::init();
    let args = Args::parse();
    if let Err(e) = start_server(args.port).await {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}
