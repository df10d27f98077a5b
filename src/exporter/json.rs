//! JSON 导出器实现
//!
//! 输出一个格式化的 JSON 数组，字段名为 camelCase（`referenceCode`、`emailVerified` 等），
//! 可直接作为批量导入接口的请求体。和 SQL 导出一样先写临时文件，完成后再替换目标文件。

use super::SyncExporter;
use super::staged::StagedFile;
use crate::account::AccountRecord;
use crate::error::Result;
use crate::exporter::ExportStats;
use std::io::Write;
use std::path::Path;

/// 同步 JSON 导出器
pub struct JsonExporter {
    staged: StagedFile,
    stats: ExportStats,
    first_record: bool,
}

impl JsonExporter {
    /// 创建新的 JSON 导出器
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut staged = StagedFile::create(path)?;

        // 写入 JSON 数组开始符
        staged.writer()?.write_all(b"[")?;

        Ok(Self { staged, stats: ExportStats::new(), first_record: true })
    }

    /// 将记录转换为缩进两格的 JSON 文本
    fn record_to_json(record: &AccountRecord) -> Result<String> {
        let json_str = serde_json::to_string_pretty(record)?;
        Ok(json_str
            .lines()
            .map(|line| format!("  {line}"))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

impl SyncExporter for JsonExporter {
    fn name(&self) -> &str {
        "JSON"
    }

    fn export_record(&mut self, record: &AccountRecord) -> Result<()> {
        let json_str = Self::record_to_json(record)?;
        let writer = self.staged.writer()?;

        if self.first_record {
            writer.write_all(b"\n")?;
            self.first_record = false;
        } else {
            writer.write_all(b",\n")?;
        }
        writer.write_all(json_str.as_bytes())?;
        self.stats.exported_records += 1;
        Ok(())
    }

    fn prepare(&mut self) -> Result<()> {
        if self.staged.is_flushed() {
            return Ok(());
        }
        let writer = self.staged.writer()?;
        if !self.first_record {
            writer.write_all(b"\n")?;
        }
        writer.write_all(b"]\n")?;
        self.staged.flush()?;
        self.stats.finish();
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.prepare()?;
        self.staged.commit()?;

        #[cfg(feature = "logging")]
        tracing::info!(
            "JSON导出完成: {} 条记录 -> {}",
            self.stats.exported_records,
            self.staged.path().display()
        );

        Ok(())
    }

    fn get_stats(&self) -> ExportStats {
        self.stats.clone()
    }
}
