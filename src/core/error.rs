// 错误处理系统
// 开发心理：统一的错误类型，内核的"查不到"走Option，真正的故障才走错误
// 业务上的零匹配不是错误，返回空序列即可

use std::io;

use thiserror::Error;

/// 推断器的主要错误类型。
#[derive(Debug, Clone, Error)]
pub enum IvError {
    /// 必填数值缺失、非正或超出定义域，在核心边界被拒绝
    #[error("输入无效: {0}")]
    InvalidInput(String),

    /// 名称或编号解析不到任何种族
    #[error("种族未找到: {0}")]
    SpeciesNotFound(String),

    /// 配置加载或校验失败
    #[error("配置错误: {0}")]
    Config(String),

    /// 序列化/反序列化失败
    #[error("解析错误: {0}")]
    Parse(String),

    /// 文件读写失败
    #[error("文件错误: {0}")]
    Io(String),
}

/// 便捷的Result类型别名
pub type Result<T> = std::result::Result<T, IvError>;

// 错误转换实现
impl From<io::Error> for IvError {
    fn from(error: io::Error) -> Self {
        IvError::Io(error.to_string())
    }
}

impl From<toml::de::Error> for IvError {
    fn from(error: toml::de::Error) -> Self {
        IvError::Config(error.to_string())
    }
}

impl From<serde_json::Error> for IvError {
    fn from(error: serde_json::Error) -> Self {
        IvError::Parse(error.to_string())
    }
}
