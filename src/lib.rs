//! 账号导出文本 → SQL upsert 语句
//!
//! 解析以 80 个连字符分隔的账号记录块，按标签抽取字段，
//! 为每条记录生成一条 `INSERT ... ON DUPLICATE KEY UPDATE` 语句。

// 核心模块 - 始终可用
pub mod account;
pub mod config;
pub mod error;
pub mod exporter;
pub mod process;

// 日志模块 - 需要 logging 功能
#[cfg(feature = "logging")]
pub mod logging;

pub use account::{AccountRecord, parse_accounts};
pub use error::{ImportError, Result};
pub use exporter::{format_statement, format_statements};
