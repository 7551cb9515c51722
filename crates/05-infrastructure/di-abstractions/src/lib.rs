//! # Dependency Injection Abstractions
//! 
//! 依赖注入抽象层，定义配置类扫描与 Bean 工厂之间的接口。
//! 
//! ## 核心接口
//! 
//! - [`BeanFactory`] - 接收被发现的 Bean 类型的工厂接口
//! - [`ComponentScanner`] - 组件扫描器接口

pub mod factory;
pub mod scanner;

pub use factory::*;
pub use scanner::*;
