//! 错误类型定义
//!
//! 这个模块定义了库中使用的所有错误类型，使用 thiserror 提供丰富的错误信息。
//! 缺少必填字段的文本块不算错误，解析器会直接跳过。

/// 账号导入的结果类型
pub type Result<T> = std::result::Result<T, ImportError>;

/// 账号导入错误类型
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// IO错误（读取源文件、写入输出文件）
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 序列化错误
    #[cfg(feature = "exporter-json")]
    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),

    /// 配置文件解析错误
    #[error("配置文件解析错误: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 日志错误（仅在启用 logging feature 时可用）
    #[cfg(feature = "logging")]
    #[error("日志错误: {0}")]
    Log(#[from] crate::logging::LogError),

    /// 其他错误
    #[error("未知错误: {0}")]
    Other(String),
}

impl ImportError {
    /// 创建一个配置错误
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        tracing::error!("配置错误: {}", message);
        Self::Config(message)
    }

    /// 创建一个其他类型错误
    pub fn other<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        tracing::error!("未知错误: {}", message);
        Self::Other(message)
    }

    /// 检查是否为 IO 错误
    pub fn is_io_error(&self) -> bool {
        matches!(self, ImportError::Io(_))
    }

    /// 检查是否为配置错误（包括配置文件解析失败）
    pub fn is_config_error(&self) -> bool {
        matches!(self, ImportError::Config(_) | ImportError::TomlDe(_))
    }

    /// 检查是否为其他错误
    pub fn is_other_error(&self) -> bool {
        matches!(self, ImportError::Other(_))
    }
}
