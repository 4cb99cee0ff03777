//! 终端店面：启动时加载一次商品目录，然后进入交互模式

use std::io;

use clap::Parser;
use storefront::{
    client::{CatalogClient, DEFAULT_API_URL},
    storefront::{Shell, Storefront},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Browse the catalog and fill a cart")]
struct Args {
    /// 商品服务地址
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[tokio::main]
async fn main() -> storefront::Result<()> {
    // 诊断信息写到 stderr，不干扰交互界面
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut storefront = Storefront::new(CatalogClient::new(args.api_url));
    storefront.load_catalog().await;

    let mut shell = Shell::new(io::stdin().lock(), io::stdout());
    shell.run(&mut storefront)?;
    Ok(())
}
