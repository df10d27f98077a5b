//! 账号文本解析的工具函数

use crate::account::types::{AFFIRMATIVE_TOKEN, BLOCK_SEPARATOR, REFERENCE_MARKER};

/// 按分隔行把整个文本切成块，保持原有顺序
///
/// 分隔符按子串匹配，不要求独占一行；首尾的空块同样会返回，由调用方过滤。
pub fn split_blocks(content: &str) -> impl Iterator<Item = &str> {
    content.split(BLOCK_SEPARATOR)
}

/// 块中是否包含推荐码标记
#[must_use]
pub fn has_reference_marker(block: &str) -> bool {
    block.contains(REFERENCE_MARKER)
}

/// 值是否为肯定回答（`Sim`，不区分大小写）
#[must_use]
pub fn is_affirmative(value: &str) -> bool {
    value.trim().to_lowercase() == AFFIRMATIVE_TOKEN
}
