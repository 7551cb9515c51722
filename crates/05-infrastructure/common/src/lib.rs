//! # Infrastructure Common
//!
//! 配置类扫描的公共基础：类型元数据、注解模型以及全局注解注册表。
//!
//! ## 核心组件
//!
//! - [`TypeInfo`] - 类型元数据（类型ID、类型名、所在模块路径）
//! - [`Annotation`] - `#[configuration]` / `#[component_scan]` 在运行时的表示
//! - [`TypeRegistry`] - 按注解和包路径查询类型的反射接口
//! - [`AnnotationRegistry`] - 基于内存的注册表实现
//!
//! ## 设计原则
//!
//! - 注解信息由过程宏生成的构造函数在程序启动时写入全局注册表
//! - 模块路径即“包”，`module_path!()` 决定类型归属

pub mod annotation;
pub mod discovery;
pub mod errors;
pub mod metadata;

pub use annotation::*;
pub use discovery::*;
pub use errors::*;
pub use metadata::*;

use std::sync::Arc;

/// 全局注解注册表
static GLOBAL_TYPE_REGISTRY: once_cell::sync::Lazy<Arc<AnnotationRegistry>> =
    once_cell::sync::Lazy::new(|| Arc::new(AnnotationRegistry::new()));

/// 获取全局注解注册表
pub fn global_type_registry() -> Arc<AnnotationRegistry> {
    GLOBAL_TYPE_REGISTRY.clone()
}

/// 向全局注解注册表登记一个注解
///
/// 由 `#[configuration]` 和 `#[component_scan]` 生成的启动函数调用。
pub fn register_annotation(type_info: TypeInfo, annotation: Annotation) {
    GLOBAL_TYPE_REGISTRY.register(type_info, annotation);
}
