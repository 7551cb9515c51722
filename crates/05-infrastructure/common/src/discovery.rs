//! 类型反射和发现机制
//!
//! 过程宏在程序启动时登记注解，扫描器通过 [`TypeRegistry`] 按注解和包路径查询类型。

use crate::{Annotation, AnnotationKind, ComponentScanAttributes, TypeInfo};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::collections::HashMap;
use tracing::debug;

/// 类型描述符：类型信息及其携带的注解
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// 类型信息
    pub type_info: TypeInfo,
    /// 注解列表
    pub annotations: Vec<Annotation>,
}

impl TypeDescriptor {
    /// 创建没有注解的描述符
    pub fn new(type_info: TypeInfo) -> Self {
        Self {
            type_info,
            annotations: Vec::new(),
        }
    }

    /// 添加注解
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.add_annotation(annotation);
        self
    }

    /// 检查是否携带指定种类的注解
    pub fn is_annotation_present(&self, kind: AnnotationKind) -> bool {
        self.annotations.iter().any(|annotation| annotation.kind() == kind)
    }

    /// 获取组件扫描属性
    pub fn component_scan(&self) -> Option<&ComponentScanAttributes> {
        self.annotations.iter().find_map(|annotation| match annotation {
            Annotation::ComponentScan(attributes) => Some(attributes),
            Annotation::Configuration => None,
        })
    }

    /// 该类型声明的基础包，没有组件扫描注解时为空
    pub fn declared_base_packages(&self) -> Vec<String> {
        self.component_scan()
            .map(|attributes| attributes.resolve(self.type_info.package()))
            .unwrap_or_default()
    }

    fn add_annotation(&mut self, annotation: Annotation) {
        if !self.annotations.contains(&annotation) {
            self.annotations.push(annotation);
        }
    }
}

/// 包匹配方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageMatch {
    /// 模块边界匹配：`app::web` 匹配 `app::web` 和 `app::web::admin`，不匹配 `app::webhook`
    #[default]
    Module,
    /// 字符串前缀匹配
    Prefix,
}

impl PackageMatch {
    /// 检查模块路径是否位于基础包之下
    pub fn matches(&self, base_package: &str, module_path: &str) -> bool {
        match self {
            PackageMatch::Prefix => module_path.starts_with(base_package),
            PackageMatch::Module => match module_path.strip_prefix(base_package) {
                Some(rest) => rest.is_empty() || rest.starts_with("::"),
                None => false,
            },
        }
    }
}

/// 检查包名是否为合法的模块路径，例如 `app::web`
pub fn is_valid_package(package: &str) -> bool {
    package.split("::").all(|segment| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|first| first.is_alphabetic() || first == '_')
            && chars.all(|ch| ch.is_alphanumeric() || ch == '_')
    })
}

/// 类型注册表 trait
pub trait TypeRegistry: Send + Sync {
    /// 获取类型描述符
    fn descriptor(&self, type_id: TypeId) -> Option<TypeDescriptor>;

    /// 获取所有类型描述符
    fn descriptors(&self) -> Vec<TypeDescriptor>;

    /// 查找位于给定包下且携带指定注解的类型，按类型名排序
    fn types_annotated_with(
        &self,
        kind: AnnotationKind,
        packages: &[String],
        package_match: PackageMatch,
    ) -> Vec<TypeDescriptor> {
        let mut found: Vec<TypeDescriptor> = self
            .descriptors()
            .into_iter()
            .filter(|descriptor| descriptor.is_annotation_present(kind))
            .filter(|descriptor| {
                packages
                    .iter()
                    .any(|package| package_match.matches(package, descriptor.type_info.package()))
            })
            .collect();
        found.sort_by(|a, b| a.type_info.type_name.cmp(b.type_info.type_name));
        found
    }
}

/// 内存中的注解注册表实现
#[derive(Debug, Default)]
pub struct AnnotationRegistry {
    types: RwLock<HashMap<TypeId, TypeDescriptor>>,
}

impl AnnotationRegistry {
    /// 创建新的内存注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记注解，同一类型的注解会合并到一个描述符中
    pub fn register(&self, type_info: TypeInfo, annotation: Annotation) {
        debug!("登记注解: {} -> {:?}", type_info.type_name, annotation.kind());

        self.types
            .write()
            .entry(type_info.id)
            .or_insert_with(|| TypeDescriptor::new(type_info))
            .add_annotation(annotation);
    }

    /// 已登记的类型数量
    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }
}

impl TypeRegistry for AnnotationRegistry {
    fn descriptor(&self, type_id: TypeId) -> Option<TypeDescriptor> {
        self.types.read().get(&type_id).cloned()
    }

    fn descriptors(&self) -> Vec<TypeDescriptor> {
        self.types.read().values().cloned().collect()
    }
}
