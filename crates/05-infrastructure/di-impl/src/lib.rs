//! # 依赖注入具体实现
//!
//! 提供配置类扫描器、扫描器配置以及内存 Bean 工厂的具体实现

pub mod bean_factory;
pub mod config;
pub mod configuration_scanner;

pub use crate::bean_factory::DefaultBeanFactory;
pub use crate::config::ScannerConfig;
pub use crate::configuration_scanner::ConfigurationBeanScanner;
