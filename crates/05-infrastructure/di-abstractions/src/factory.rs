//! Bean 工厂抽象接口
//!
//! 配置类扫描的下游：负责实例化和装配被发现的 Bean 类型

use async_trait::async_trait;
use infrastructure_common::{DependencyResult, TypeDescriptor, TypeInfo};

/// Bean 工厂 trait
///
/// 扫描器只负责交付 Bean 类型，实例化、依赖解析和生命周期由实现方处理。
#[async_trait]
pub trait BeanFactory: Send + Sync {
    /// 批量添加 Bean 类型
    async fn add_all_bean_classes(&self, classes: Vec<TypeDescriptor>) -> DependencyResult<()>;

    /// 获取已添加的 Bean 类型
    fn bean_classes(&self) -> Vec<TypeInfo>;
}
