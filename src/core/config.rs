/*
* 开发心理过程：
* 1. 推断内核本身零配置，可调的只有展示层关心的参数
* 2. 支持TOML文件加载，缺失字段回退到默认值
* 3. 加载后立即校验，错误尽早暴露
*/

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{IvError, Result};

/// 扫描器的展示层配置。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// 日志过滤器，未设置RUST_LOG时生效
    pub log_level: String,
    /// 结果表最多展示多少行，防止超大结果集刷屏
    pub result_limit: usize,
    /// 默认以JSON输出
    pub json_output: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            result_limit: 200,
            json_output: false,
        }
    }
}

impl ScannerConfig {
    /// 从TOML文本解析配置。
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ScannerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载配置。
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// 配置校验。
    pub fn validate(&self) -> Result<()> {
        if self.result_limit == 0 {
            return Err(IvError::Config("result_limit必须大于0".to_string()));
        }
        if self.log_level.trim().is_empty() {
            return Err(IvError::Config("log_level不能为空".to_string()));
        }
        Ok(())
    }
}
