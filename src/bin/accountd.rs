//! Account service entry point.

use tracing_subscriber::{fmt, EnvFilter};

use saltmere::server::config::ServerConfig;
use saltmere::server::serve;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = ServerConfig::from_env();
    serve(config).await
}
