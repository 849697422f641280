mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // 解析命令行并运行（日志在加载配置后初始化）
    Cli::parse().run().await
}
