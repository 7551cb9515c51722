//! 内存 Bean 工厂

use async_trait::async_trait;
use di_abstractions::BeanFactory;
use infrastructure_common::{DependencyResult, TypeDescriptor, TypeInfo};
use parking_lot::RwLock;
use std::any::TypeId;
use tracing::{debug, info};

/// 只记录 Bean 类型的工厂实现
///
/// 按首次添加的顺序保存，重复添加的类型会被忽略。
#[derive(Debug, Default)]
pub struct DefaultBeanFactory {
    bean_classes: RwLock<Vec<TypeDescriptor>>,
}

impl DefaultBeanFactory {
    /// 创建新的工厂
    pub fn new() -> Self {
        Self::default()
    }

    /// 检查是否已添加指定类型
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.bean_classes
            .read()
            .iter()
            .any(|descriptor| descriptor.type_info.id == type_id)
    }

    /// 已添加的 Bean 类型数量
    pub fn len(&self) -> usize {
        self.bean_classes.read().len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.bean_classes.read().is_empty()
    }
}

#[async_trait]
impl BeanFactory for DefaultBeanFactory {
    async fn add_all_bean_classes(&self, classes: Vec<TypeDescriptor>) -> DependencyResult<()> {
        let mut bean_classes = self.bean_classes.write();
        let mut added = 0;

        for descriptor in classes {
            if bean_classes
                .iter()
                .any(|existing| existing.type_info == descriptor.type_info)
            {
                debug!("Bean 类型已存在，跳过: {}", descriptor.type_info);
                continue;
            }
            debug!("添加 Bean 类型: {}", descriptor.type_info);
            bean_classes.push(descriptor);
            added += 1;
        }

        info!("添加了 {} 个 Bean 类型，共 {} 个", added, bean_classes.len());
        Ok(())
    }

    fn bean_classes(&self) -> Vec<TypeInfo> {
        self.bean_classes
            .read()
            .iter()
            .map(|descriptor| descriptor.type_info)
            .collect()
    }
}
