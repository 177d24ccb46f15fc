use adboard_http::stub::start_stub;
use clap::Parser;
use log::error;

#[derive(Parser, Debug)]
#[command(
    name = "adboard-stub",
    version,
    about = "Local stub of the advertisement API"
)]
struct Args {
    /// Port to listen on (binds 127.0.0.1)
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() {
    adboard::telemetry::init();
    let args = Args::parse();

    if let Err(e) = start_stub(args.port).await {
        error!("{e}");
        std::process::exit(1);
    }
}
