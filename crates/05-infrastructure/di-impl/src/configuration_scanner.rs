//! 配置类扫描器
//!
//! 从根配置类出发，找到其组件扫描路径下的所有配置类，合并它们声明的基础包，
//! 并把发现的配置类交给 Bean 工厂。

use crate::config::ScannerConfig;
use async_trait::async_trait;
use di_abstractions::{BeanFactory, ComponentScanner};
use infrastructure_common::{
    global_type_registry, is_valid_package, AnnotationKind, ComponentError, ComponentResult,
    TypeDescriptor, TypeRegistry,
};
use std::any::TypeId;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 配置类扫描器
pub struct ConfigurationBeanScanner {
    /// 所有已注册配置类声明的基础包
    base_packages: HashSet<String>,
    bean_factory: Arc<dyn BeanFactory>,
    registry: Arc<dyn TypeRegistry>,
    config: ScannerConfig,
}

impl ConfigurationBeanScanner {
    /// 创建使用全局注解注册表的扫描器
    pub fn new(bean_factory: Arc<dyn BeanFactory>) -> Self {
        Self {
            base_packages: HashSet::new(),
            bean_factory,
            registry: global_type_registry(),
            config: ScannerConfig::default(),
        }
    }

    /// 使用指定的类型注册表
    pub fn with_registry(mut self, registry: Arc<dyn TypeRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// 使用指定的扫描器配置
    pub fn with_config(mut self, config: ScannerConfig) -> Self {
        self.config = config;
        self
    }

    /// 注册根配置类
    ///
    /// 返回交给 Bean 工厂的配置类数量。`T` 必须带有 `#[configuration]`。
    pub async fn register<T: 'static>(&mut self) -> ComponentResult<usize> {
        self.register_type(TypeId::of::<T>(), std::any::type_name::<T>())
            .await
    }

    /// 按 [`TypeId`] 注册根配置类
    pub async fn register_type(
        &mut self,
        type_id: TypeId,
        type_name: &str,
    ) -> ComponentResult<usize> {
        let root = self
            .registry
            .descriptor(type_id)
            .filter(|descriptor| descriptor.is_annotation_present(AnnotationKind::Configuration))
            .ok_or_else(|| {
                warn!("拒绝注册非配置类: {}", type_name);
                ComponentError::not_configuration(type_name)
            })?;

        info!("注册配置类: {}", root.type_info);

        let configuration_classes = self.scan_configuration_classes(&root);
        self.base_packages
            .extend(declared_base_packages(&configuration_classes));

        let discovered = configuration_classes.len();
        self.bean_factory
            .add_all_bean_classes(configuration_classes)
            .await?;

        info!(
            "配置类 {} 扫描完成，发现 {} 个配置类，累计 {} 个基础包",
            root.type_info,
            discovered,
            self.base_packages.len()
        );
        Ok(discovered)
    }

    /// 所有已注册配置类声明的基础包，已排序
    pub fn base_packages(&self) -> Vec<String> {
        let mut packages: Vec<String> = self.base_packages.iter().cloned().collect();
        packages.sort();
        packages
    }

    fn scan_configuration_classes(&self, root: &TypeDescriptor) -> Vec<TypeDescriptor> {
        let root_packages = root.declared_base_packages();
        if root_packages.is_empty() {
            debug!("{} 未声明组件扫描，仅注册自身", root.type_info);
            return vec![root.clone()];
        }

        let mut scanned: HashSet<String> = HashSet::new();
        let mut seen: HashSet<TypeId> = HashSet::new();
        let mut pending = root_packages;
        let mut found = Vec::new();

        while !pending.is_empty() {
            pending.retain(|package| scanned.insert(package.clone()));
            if pending.is_empty() {
                break;
            }
            debug!("扫描基础包: {:?}", pending);

            let batch = self.registry.types_annotated_with(
                AnnotationKind::Configuration,
                &pending,
                self.config.package_match,
            );
            pending.clear();

            for descriptor in batch {
                if !seen.insert(descriptor.type_info.id) {
                    continue;
                }
                if self.config.transitive {
                    pending.extend(
                        descriptor
                            .declared_base_packages()
                            .into_iter()
                            .filter(|package| !scanned.contains(package)),
                    );
                }
                found.push(descriptor);
            }
        }

        found.sort_by(|a, b| a.type_info.type_name.cmp(b.type_info.type_name));
        found
    }
}

/// 合并配置类声明的基础包
fn declared_base_packages(configuration_classes: &[TypeDescriptor]) -> HashSet<String> {
    configuration_classes
        .iter()
        .flat_map(TypeDescriptor::declared_base_packages)
        .collect()
}

#[async_trait]
impl ComponentScanner for ConfigurationBeanScanner {
    async fn scan(&self, target: &str) -> ComponentResult<Vec<TypeDescriptor>> {
        if !self.supports(target) {
            return Err(ComponentError::scan_error(format!(
                "无效的扫描目标: {:?}",
                target
            )));
        }

        Ok(self.registry.types_annotated_with(
            AnnotationKind::Configuration,
            &[target.to_string()],
            self.config.package_match,
        ))
    }

    fn name(&self) -> &str {
        "ConfigurationBeanScanner"
    }

    fn supports(&self, target: &str) -> bool {
        is_valid_package(target)
    }
}
