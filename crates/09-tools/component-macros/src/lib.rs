//! # Component Macros
//!
//! 这个 crate 提供了用于声明配置类和组件扫描路径的过程宏。
//!
//! ## 核心宏
//!
//! - [`configuration`] - 配置类标记
//! - [`component_scan`] - 组件扫描路径声明
//!
//! 生成的代码会在程序启动时把注解登记到 `infrastructure_common` 的全局注册表，
//! 使用方需要依赖 `infrastructure-common` 和 `ctor`。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::{component_scan, configuration};
//!
//! #[configuration]
//! #[component_scan(base_packages = ["my_app::web", "my_app::data"])]
//! pub struct AppConfig;
//! ```

use proc_macro::TokenStream;

mod component_scan;
mod configuration;
mod utils;

// Re-exports are not allowed in proc-macro crates

/// 配置类标记宏
///
/// 把结构体登记为配置类，所属包为定义处的 `module_path!()`。
/// 不接受参数，也不支持泛型结构体。
///
/// # 示例
///
/// ```rust,ignore
/// #[configuration]
/// pub struct DataConfig;
/// ```
#[proc_macro_attribute]
pub fn configuration(args: TokenStream, input: TokenStream) -> TokenStream {
    configuration::configuration_impl(args, input)
}

/// 组件扫描声明宏
///
/// # 参数
///
/// - `"a::b", "c"` - 位置参数，等同于 `value`
/// - `value = ["a::b"]` - 基础包
/// - `base_packages = ["a::b"]` - 基础包，优先于 `value`
///
/// 不带参数时扫描结构体自身所在的模块。
///
/// # 示例
///
/// ```rust,ignore
/// #[configuration]
/// #[component_scan("my_app::web")]
/// pub struct WebConfig;
/// ```
#[proc_macro_attribute]
pub fn component_scan(args: TokenStream, input: TokenStream) -> TokenStream {
    component_scan::component_scan_impl(args, input)
}
