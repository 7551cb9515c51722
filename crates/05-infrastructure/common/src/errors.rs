//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("组件注册失败: {type_name}, 原因: {message}")]
    RegistrationError { type_name: String, message: String },
}

/// 组件错误类型
#[derive(Error, Debug)]
pub enum ComponentError {
    #[error("只能注册配置类: {type_name}")]
    NotConfiguration { type_name: String },

    #[error("组件扫描失败: {message}")]
    ScanError { message: String },

    #[error("组件注册失败: {type_name}, 原因: {message}")]
    RegistrationError { type_name: String, message: String },
}

impl ComponentError {
    /// 创建扫描错误
    pub fn scan_error(message: impl Into<String>) -> Self {
        Self::ScanError {
            message: message.into(),
        }
    }

    /// 创建非配置类错误
    pub fn not_configuration(type_name: impl Into<String>) -> Self {
        Self::NotConfiguration {
            type_name: type_name.into(),
        }
    }
}

impl From<DependencyError> for ComponentError {
    fn from(error: DependencyError) -> Self {
        match error {
            DependencyError::RegistrationError { type_name, message } => {
                Self::RegistrationError { type_name, message }
            }
        }
    }
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type ComponentResult<T> = Result<T, ComponentError>;
