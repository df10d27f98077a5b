//! 配置管理模块
//!
//! 提供统一的配置文件读取和管理功能。命令行参数优先于配置文件，
//! 配置文件优先于默认值。

use crate::error::{ImportError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 默认的源文件路径
pub const DEFAULT_INPUT_PATH: &str = "codigos_referencia.txt";
/// 默认的 SQL 输出路径
pub const DEFAULT_OUTPUT_PATH: &str = "import_accounts.sql";
/// 默认预览条数（开头和结尾各显示多少条）
pub const DEFAULT_PREVIEW_COUNT: usize = 5;

/// 主配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
    /// 导入配置
    #[serde(default)]
    pub import: ImportConfig,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// 是否启用控制台输出（写到 stderr，stdout 留给结果摘要）
    pub enable_console: bool,
    /// 日志输出目录，不设置则不写日志文件
    pub log_dir: Option<String>,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// 导入配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// 账号导出文本路径
    pub input_path: PathBuf,
    /// SQL 输出路径
    pub output_path: PathBuf,
    /// JSON 输出路径，不设置则不导出 JSON
    pub json_out_path: Option<PathBuf>,
    /// 预览条数
    pub preview_count: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { enable_console: true, log_dir: None, level: "info".to_string() }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            json_out_path: None,
            preview_count: DEFAULT_PREVIEW_COUNT,
        }
    }
}

impl Config {
    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// 从字符串加载配置
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        match self.log.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ImportError::config_error(format!(
                    "无效的日志级别: {}",
                    self.log.level
                )));
            }
        }

        if self.import.preview_count == 0 {
            return Err(ImportError::config_error("预览条数不能为0"));
        }

        if self.import.input_path == self.import.output_path {
            return Err(ImportError::config_error(format!(
                "输出路径不能与源文件相同: {}",
                self.import.input_path.display()
            )));
        }

        if let Some(json_path) = self.import.json_out_path.as_ref() {
            if *json_path == self.import.input_path {
                return Err(ImportError::config_error(format!(
                    "JSON 输出路径不能与源文件相同: {}",
                    json_path.display()
                )));
            }
            if *json_path == self.import.output_path {
                return Err(ImportError::config_error(format!(
                    "JSON 输出路径不能与 SQL 输出路径相同: {}",
                    json_path.display()
                )));
            }
        }

        Ok(())
    }
}
