//! 扫描器配置

use infrastructure_common::{ConfigError, ConfigResult, PackageMatch};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, error};

/// 环境变量前缀，例如 `DI_SCAN_TRANSITIVE=false`
pub const ENV_PREFIX: &str = "DI_SCAN";

/// 配置类扫描器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// 是否继续扫描被发现的配置类声明的基础包，直到没有新的包出现
    pub transitive: bool,
    /// 包匹配方式
    pub package_match: PackageMatch,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            transitive: true,
            package_match: PackageMatch::Module,
        }
    }
}

impl ScannerConfig {
    /// 从配置文件和环境变量加载
    ///
    /// 文件不存在时使用默认值，环境变量覆盖文件中的值。
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("加载扫描器配置: {}", path.display());

        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                error!("扫描器配置构建失败: {}", e);
                ConfigError::ParseError {
                    source: Box::new(e),
                }
            })?;

        settings.try_deserialize().map_err(|e| {
            error!("扫描器配置绑定失败: {}", e);
            ConfigError::ParseError {
                source: Box::new(e),
            }
        })
    }

    /// 设置是否传递扫描
    pub fn with_transitive(mut self, transitive: bool) -> Self {
        self.transitive = transitive;
        self
    }

    /// 设置包匹配方式
    pub fn with_package_match(mut self, package_match: PackageMatch) -> Self {
        self.package_match = package_match;
        self
    }
}
