//! 注解模型
//!
//! `#[configuration]` 与 `#[component_scan]` 在运行时的表示

/// 注解种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    /// 配置类标记
    Configuration,
    /// 组件扫描声明
    ComponentScan,
}

/// 组件扫描属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComponentScanAttributes {
    /// `#[component_scan("a::b")]` 的位置参数，`base_packages` 的别名
    pub value: &'static [&'static str],
    /// 显式声明的基础包
    pub base_packages: &'static [&'static str],
}

impl ComponentScanAttributes {
    /// 解析实际生效的基础包
    ///
    /// `base_packages` 优先，其次是 `value`，两者都为空时使用所属类型自己的包。
    pub fn resolve(&self, owner_package: &str) -> Vec<String> {
        let declared = if !self.base_packages.is_empty() {
            self.base_packages
        } else {
            self.value
        };

        if declared.is_empty() {
            return vec![owner_package.to_string()];
        }

        declared.iter().map(|package| (*package).to_string()).collect()
    }
}

/// 注解
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    /// 配置类
    Configuration,
    /// 组件扫描
    ComponentScan(ComponentScanAttributes),
}

impl Annotation {
    /// 获取注解种类
    pub fn kind(&self) -> AnnotationKind {
        match self {
            Annotation::Configuration => AnnotationKind::Configuration,
            Annotation::ComponentScan(_) => AnnotationKind::ComponentScan,
        }
    }
}
