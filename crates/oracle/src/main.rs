use clap::Parser;
use signing_oracle::{router, run};
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
struct Args {
    #[clap(long, env = "ORACLE_HOST", default_value = "0.0.0.0")]
    host: String,
    #[clap(long, env = "ORACLE_PORT", default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    if let Err(e) = run(args.host, args.port, router()).await {
        error!("server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
