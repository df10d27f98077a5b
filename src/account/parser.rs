//! 账号导出文本解析器 - 分块与按标签抽取字段
//!
//! ## 解析流程
//!
//! ```text
//! 原始文本 → split_blocks() → 标记检查 → parse_block() → AccountRecord
//!                                 ↓              ↓
//!                           无标记：跳过    缺少邮箱：跳过
//! ```
//!
//! 每个字段用 `<标签>:\s*(<捕获>)` 在块内查找第一次出现的位置，标签顺序不限。
//! 捕获方式分三类：
//!
//! - 整行字段（时间、邮箱、用户名、密码）：`.+`，取到行尾
//! - 年龄：`\d+`，取第一段数字
//! - 短标识字段（推荐码、性别、邀请码、邮箱验证）：`\w+`，遇到第一个非单词字符即截断
//!
//! 捕获到的值都会去掉首尾空白。缺失的可选字段为 `None`，不会报错。

use crate::account::types::{AccountRecord, labels};
use crate::account::utils::{has_reference_marker, is_affirmative, split_blocks};
use crate::error::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

/// 整行字段：取到行尾
fn line_field(label: &str) -> Regex {
    Regex::new(&format!(r"{}:\s*(.+)", regex::escape(label))).unwrap()
}

/// 数字字段：取第一段数字
fn digits_field(label: &str) -> Regex {
    // `\d` 在 regex 里匹配所有 Unicode 数字，这里只要 ASCII 0-9
    Regex::new(&format!(r"{}:\s*([0-9]+)", regex::escape(label))).unwrap()
}

/// 短标识字段：遇到第一个非单词字符截断
fn token_field(label: &str) -> Regex {
    Regex::new(&format!(r"{}:\s*(\w+)", regex::escape(label))).unwrap()
}

lazy_static! {
    static ref DATE_RE: Regex = line_field(labels::DATE);
    static ref REFERENCE_CODE_RE: Regex = token_field(labels::REFERENCE_CODE);
    static ref EMAIL_RE: Regex = line_field(labels::EMAIL);
    static ref USERNAME_RE: Regex = line_field(labels::USERNAME);
    static ref PASSWORD_RE: Regex = line_field(labels::PASSWORD);
    static ref AGE_RE: Regex = digits_field(labels::AGE);
    static ref GENDER_RE: Regex = token_field(labels::GENDER);
    static ref INVITE_CODE_RE: Regex = token_field(labels::INVITE_CODE_USED);
    static ref EMAIL_VERIFIED_RE: Regex = token_field(labels::EMAIL_VERIFIED);
}

/// 解析整个导出文本，返回按原文顺序排列的账号记录
///
/// 不含推荐码标记的块（文件头、尾部碎片等）以及缺少邮箱的块会被直接丢弃，
/// 这两种情况都不算错误。
pub fn parse_accounts(content: &str) -> Vec<AccountRecord> {
    split_blocks(content)
        .filter(|block| has_reference_marker(block))
        .filter_map(parse_block)
        .collect()
}

/// 读取 UTF-8 文件并解析其中的账号记录
///
/// # Errors
/// 文件不存在、无法读取或不是合法 UTF-8 时返回 `ImportError::Io`。
pub fn parse_accounts_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<AccountRecord>> {
    let path = path.as_ref();
    #[cfg(feature = "logging")]
    tracing::debug!("读取源文件: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    let accounts = parse_accounts(&content);

    #[cfg(feature = "logging")]
    tracing::info!(
        "文件 {} 解析完成，共 {} 条账号记录",
        path.display(),
        accounts.len()
    );
    Ok(accounts)
}

/// 从单个块中抽取账号记录，推荐码或邮箱缺失时返回 `None`
pub fn parse_block(block: &str) -> Option<AccountRecord> {
    let reference_code = capture(&REFERENCE_CODE_RE, block)?;
    let email = capture(&EMAIL_RE, block)?;

    Some(AccountRecord {
        date: capture(&DATE_RE, block),
        reference_code,
        email,
        username: capture(&USERNAME_RE, block),
        password: capture(&PASSWORD_RE, block),
        age: capture(&AGE_RE, block).and_then(|s| s.parse().ok()),
        gender: capture(&GENDER_RE, block),
        invite_code_used: capture(&INVITE_CODE_RE, block),
        email_verified: capture(&EMAIL_VERIFIED_RE, block)
            .is_some_and(|v| is_affirmative(&v)),
    })
}

/// 取第一个捕获组并去掉首尾空白
fn capture(re: &Regex, block: &str) -> Option<String> {
    re.captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
