//! 配置类扫描的端到端测试
//!
//! 配置类通过宏登记到全局注册表，扫描器使用默认的全局注册表。

use component_macros::{component_scan, configuration};
use di_abstractions::{BeanFactory, ComponentScanner};
use di_impl::{ConfigurationBeanScanner, DefaultBeanFactory, ScannerConfig};
use infrastructure_common::ComponentError;
use std::any::TypeId;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// 初始化测试日志系统（只初始化一次）
fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

mod app {
    use super::*;

    #[configuration]
    #[component_scan("configuration_scan::app::web")]
    pub struct AppConfig;

    /// 普通类型，不是配置类
    pub struct NotAConfig;

    pub mod web {
        use super::*;

        #[configuration]
        #[component_scan(base_packages = [
            "configuration_scan::app::data",
            "configuration_scan::app::security",
        ])]
        pub struct WebConfig;
    }

    pub mod data {
        use super::*;

        #[configuration]
        pub struct DataConfig;
    }

    pub mod security {
        use super::*;

        #[configuration]
        #[component_scan]
        pub struct SecurityConfig;
    }
}

mod standalone {
    use super::*;

    #[configuration]
    pub struct StandaloneConfig;
}

mod legacy {
    use super::*;

    #[configuration]
    #[component_scan(value = ["configuration_scan::legacy"])]
    pub struct LegacyConfig;

    pub mod data {
        use super::*;

        #[configuration]
        pub struct LegacyDataConfig;
    }
}

fn new_scanner() -> (ConfigurationBeanScanner, Arc<DefaultBeanFactory>) {
    init_test_logger();
    let factory = Arc::new(DefaultBeanFactory::new());
    (ConfigurationBeanScanner::new(factory.clone()), factory)
}

fn bean_names(factory: &DefaultBeanFactory) -> Vec<&'static str> {
    let mut names: Vec<_> = factory
        .bean_classes()
        .iter()
        .map(|type_info| type_info.short_name())
        .collect();
    names.sort_unstable();
    names
}

#[tokio::test]
async fn test_register_root_discovers_nested_configurations() {
    let (mut scanner, factory) = new_scanner();

    let discovered = scanner.register::<app::AppConfig>().await.unwrap();

    assert_eq!(discovered, 3);
    assert_eq!(
        bean_names(&factory),
        vec!["DataConfig", "SecurityConfig", "WebConfig"]
    );
    assert!(factory.contains(TypeId::of::<app::web::WebConfig>()));
    assert!(!factory.contains(TypeId::of::<app::AppConfig>()));
    assert_eq!(
        scanner.base_packages(),
        vec![
            "configuration_scan::app::data",
            "configuration_scan::app::security",
        ]
    );
}

#[tokio::test]
async fn test_register_without_transitive_scan() {
    let (scanner, factory) = new_scanner();
    let mut scanner = scanner.with_config(ScannerConfig::default().with_transitive(false));

    let discovered = scanner.register::<app::AppConfig>().await.unwrap();

    assert_eq!(discovered, 1);
    assert_eq!(bean_names(&factory), vec!["WebConfig"]);
    assert_eq!(scanner.base_packages().len(), 2);
}

#[tokio::test]
async fn test_register_configuration_without_component_scan() {
    let (mut scanner, factory) = new_scanner();

    let discovered = scanner
        .register::<standalone::StandaloneConfig>()
        .await
        .unwrap();

    assert_eq!(discovered, 1);
    assert_eq!(bean_names(&factory), vec!["StandaloneConfig"]);
    assert!(scanner.base_packages().is_empty());
}

#[tokio::test]
async fn test_register_rejects_non_configuration() {
    let (mut scanner, factory) = new_scanner();

    let result = scanner.register::<app::NotAConfig>().await;

    match result {
        Err(ComponentError::NotConfiguration { type_name }) => {
            assert!(type_name.ends_with("NotAConfig"));
        }
        other => panic!("期望 NotConfiguration 错误, 实际: {:?}", other),
    }
    assert!(factory.is_empty());
}

#[tokio::test]
async fn test_value_alias_includes_root_in_own_package() {
    let (mut scanner, factory) = new_scanner();

    let discovered = scanner.register::<legacy::LegacyConfig>().await.unwrap();

    assert_eq!(discovered, 2);
    assert_eq!(
        bean_names(&factory),
        vec!["LegacyConfig", "LegacyDataConfig"]
    );
    assert_eq!(scanner.base_packages(), vec!["configuration_scan::legacy"]);
}

#[tokio::test]
async fn test_base_packages_accumulate_across_registrations() {
    let (mut scanner, factory) = new_scanner();

    scanner
        .register::<standalone::StandaloneConfig>()
        .await
        .unwrap();
    scanner.register::<app::AppConfig>().await.unwrap();
    scanner.register::<legacy::LegacyConfig>().await.unwrap();
    scanner.register::<app::AppConfig>().await.unwrap();

    assert_eq!(
        scanner.base_packages(),
        vec![
            "configuration_scan::app::data",
            "configuration_scan::app::security",
            "configuration_scan::legacy",
        ]
    );
    assert_eq!(factory.len(), 6);
}

#[tokio::test]
async fn test_component_scanner_lists_configurations_in_package() {
    let (scanner, _) = new_scanner();

    let found = scanner.scan("configuration_scan::app").await.unwrap();
    let names: Vec<_> = found.iter().map(|d| d.type_info.short_name()).collect();

    assert_eq!(
        names,
        vec!["AppConfig", "DataConfig", "SecurityConfig", "WebConfig"]
    );
    assert!(scanner.supports("configuration_scan::app"));
    assert!(!scanner.supports(""));
}
