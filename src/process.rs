use crate::account::{AccountRecord, parse_accounts_from_file};
use crate::config::ImportConfig;
use crate::error::Result;
use crate::exporter::{ExportStats, MultiExporter, SqlExporter};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::time::Instant;

/// 一次导入的结果摘要
#[derive(Debug, Clone)]
pub struct ImportSummary {
    /// 解析出的记录总数（等于写出的 SQL 语句数）
    pub total: usize,
    /// SQL 输出路径
    pub output_path: PathBuf,
    /// JSON 输出路径（如有）
    pub json_out_path: Option<PathBuf>,
    /// 开头的若干条记录
    pub head: Vec<AccountRecord>,
    /// 结尾的若干条记录
    pub tail: Vec<AccountRecord>,
    /// 每个导出器的统计信息
    pub stats: Vec<(String, ExportStats)>,
}

/// 取开头和结尾各最多 `count` 条记录
///
/// 记录不足 `count` 条时两部分都是全部记录，与逐段截取的行为一致。
pub fn preview(
    accounts: &[AccountRecord],
    count: usize,
) -> (&[AccountRecord], &[AccountRecord]) {
    let head = &accounts[..count.min(accounts.len())];
    let tail = &accounts[accounts.len().saturating_sub(count)..];
    (head, tail)
}

/// 执行一次完整的导入：读取源文件 → 解析 → 写出 SQL（以及可选的 JSON）
///
/// # Errors
/// 源文件无法读取、输出文件无法写入时返回错误，调用方应当以非零状态退出。
pub fn run_import(config: &ImportConfig) -> Result<ImportSummary> {
    let start = Instant::now();
    #[cfg(feature = "logging")]
    tracing::info!(
        "开始导入: {} → {}",
        config.input_path.display(),
        config.output_path.display()
    );

    let accounts = parse_accounts_from_file(&config.input_path)?;

    let mut exporters = MultiExporter::new();
    exporters.add_exporter(SqlExporter::new(&config.output_path)?);
    if let Some(json_path) = config.json_out_path.as_ref() {
        add_json_exporter(&mut exporters, json_path)?;
    }

    exporters.export_batch(&accounts)?;
    exporters.finalize_all()?;

    let (head, tail) = preview(&accounts, config.preview_count);
    let summary = ImportSummary {
        total: accounts.len(),
        output_path: config.output_path.clone(),
        json_out_path: config.json_out_path.clone(),
        head: head.to_vec(),
        tail: tail.to_vec(),
        stats: exporters.get_all_stats(),
    };

    #[cfg(feature = "logging")]
    tracing::info!(
        "导入完成，共 {} 条记录，总耗时: {:.2?}",
        summary.total,
        start.elapsed()
    );
    #[cfg(not(feature = "logging"))]
    let _ = start;

    Ok(summary)
}

#[cfg(feature = "exporter-json")]
fn add_json_exporter(
    exporters: &mut MultiExporter,
    path: &std::path::Path,
) -> Result<()> {
    exporters.add_exporter(crate::exporter::JsonExporter::new(path)?);
    Ok(())
}

#[cfg(not(feature = "exporter-json"))]
fn add_json_exporter(
    _exporters: &mut MultiExporter,
    path: &std::path::Path,
) -> Result<()> {
    Err(crate::error::ImportError::config_error(format!(
        "未启用 exporter-json 功能，无法导出 {}",
        path.display()
    )))
}

/// 生成给用户看的摘要文本
pub fn render_summary(summary: &ImportSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "共解析账号: {}", summary.total);
    let _ = writeln!(out, "SQL 文件已生成: {}", summary.output_path.display());
    if let Some(json_path) = summary.json_out_path.as_ref() {
        let _ = writeln!(out, "JSON 文件已生成: {}", json_path.display());
    }

    let _ = writeln!(out, "\n前 {} 条账号:", summary.head.len());
    for record in &summary.head {
        let _ = writeln!(out, "  - {}", record.preview_line());
    }

    let _ = writeln!(out, "\n后 {} 条账号:", summary.tail.len());
    for record in &summary.tail {
        let _ = writeln!(out, "  - {}", record.preview_line());
    }

    if !summary.stats.is_empty() {
        let _ = writeln!(out, "\n导出统计:");
        for (name, stats) in &summary.stats {
            let _ = writeln!(out, "  - {name}: {stats}");
        }
    }
    out
}
