//! 商品服务入口

use std::path::PathBuf;

use clap::Parser;
use storefront::{
    app::{build_router, AppState},
    infrastructure::{config, Logger},
};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "catalog_server", about = "Serves the product catalog and accepts orders")]
struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 覆盖配置中的端口
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> storefront::Result<()> {
    let args = Args::parse();

    let mut config = config::load_config(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.http.port = port;
        config.validate()?;
    }

    let _guard = Logger::init(&config.logging)?;
    config::describe_source(args.config.as_deref());

    let app = build_router(AppState::default(), &config.http);

    let listener = TcpListener::bind(config.http.addr()).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
