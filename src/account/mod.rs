//! 账号导出文本解析模块
//!
//! 提供账号记录的类型定义、按标签抽取字段的解析器和工具函数

pub mod parser;
pub mod types;
pub mod utils;

// 重新导出核心类型和函数
pub use parser::{parse_accounts, parse_accounts_from_file};
pub use types::{AccountRecord, BLOCK_SEPARATOR, DEFAULT_AGE, REFERENCE_MARKER};
pub use utils::{has_reference_marker, is_affirmative, split_blocks};
