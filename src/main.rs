use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use platescan::detection::ocr;
use platescan::server;

#[derive(Parser)]
#[command(name = "platescan")]
#[command(about = "Detect and read vehicle number plates in a browser demo")]
struct Cli {
    /// Address to bind the UI server to
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,

    /// Directory containing the OCR models (defaults to ~/.cache/ocrs)
    #[arg(long, value_name = "DIR")]
    models_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Cli::parse();

    let engine = ocr::init_ocr_engine(args.models_dir.as_deref())?;
    tracing::info!("OCR engine initialized");

    server::start_server(args.listen, engine).await
}
