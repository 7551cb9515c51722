//! # 示例应用程序
//!
//! 演示如何声明配置类并通过配置类扫描器把它们交给 Bean 工厂

use clap::Parser;
use component_macros::{component_scan, configuration};
use di_abstractions::BeanFactory;
use di_impl::{ConfigurationBeanScanner, DefaultBeanFactory, ScannerConfig};
use std::sync::Arc;
use tracing::info;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "配置类扫描示例应用")]
struct Args {
    /// 扫描器配置文件路径
    #[arg(short, long, default_value = "config/scanner.toml")]
    config: String,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// 应用根配置
#[configuration]
#[component_scan("example_app::services")]
pub struct ApplicationConfig;

mod services {
    use super::*;

    /// 服务层配置，继续扫描仓储层
    #[configuration]
    #[component_scan(base_packages = ["example_app::repositories"])]
    pub struct ServiceConfig;
}

mod repositories {
    use super::*;

    /// 仓储层配置
    #[configuration]
    #[component_scan]
    pub struct RepositoryConfig;
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&args.log_level))
        .init();

    info!("启动配置类扫描示例应用");

    let config = ScannerConfig::load(&args.config)?;
    info!("扫描器配置: {:?}", config);

    let bean_factory = Arc::new(DefaultBeanFactory::new());
    let mut scanner = ConfigurationBeanScanner::new(bean_factory.clone()).with_config(config);

    let discovered = scanner.register::<ApplicationConfig>().await?;
    info!("发现 {} 个配置类", discovered);

    for bean_class in bean_factory.bean_classes() {
        info!("Bean 类型: {} (包: {})", bean_class, bean_class.package());
    }
    for package in scanner.base_packages() {
        info!("基础包: {}", package);
    }

    Ok(())
}

/// 解析日志级别
fn parse_log_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}
