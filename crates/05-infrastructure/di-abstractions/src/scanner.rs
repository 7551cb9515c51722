//! 组件扫描器抽象接口
//!
//! 提供按包路径发现组件的能力

use async_trait::async_trait;
use infrastructure_common::{ComponentResult, TypeDescriptor};

/// 组件扫描器 trait
///
/// 用于自动发现和扫描组件
#[async_trait]
pub trait ComponentScanner: Send + Sync {
    /// 扫描指定包路径中的组件
    async fn scan(&self, target: &str) -> ComponentResult<Vec<TypeDescriptor>>;

    /// 获取扫描器名称
    fn name(&self) -> &str;

    /// 检查是否支持指定的扫描目标
    fn supports(&self, target: &str) -> bool;
}
