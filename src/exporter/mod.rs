//! 数据导出模块
//!
//! 提供统一的导出接口：SQL upsert 导出始终可用，JSON 导出需要 `exporter-json` 功能

pub mod multi_exporter;
pub mod sql;
pub mod staged;
pub mod stats;

#[cfg(feature = "exporter-json")]
pub mod json;

use crate::account::AccountRecord;
use crate::error::Result;

#[cfg(feature = "exporter-json")]
pub use json::JsonExporter;
pub use multi_exporter::MultiExporter;
pub use sql::{SqlExporter, escape_sql_literal, format_statement, format_statements};
pub use staged::StagedFile;
pub use stats::ExportStats;

/// 同步数据导出器的统一接口
pub trait SyncExporter {
    /// 导出器名称
    fn name(&self) -> &str;

    /// 导出单个记录
    fn export_record(&mut self, record: &AccountRecord) -> Result<()>;

    /// 批量导出记录
    fn export_batch(&mut self, records: &[AccountRecord]) -> Result<()> {
        for record in records {
            self.export_record(record)?;
        }
        Ok(())
    }

    /// 写出剩余内容并落盘，但还不替换目标文件，重复调用不报错
    fn prepare(&mut self) -> Result<()> {
        Ok(())
    }

    /// 完成导出：`prepare` 之后把结果移动到目标路径
    fn finalize(&mut self) -> Result<()> {
        self.prepare()
    }

    /// 获取导出统计信息
    fn get_stats(&self) -> ExportStats {
        ExportStats::default()
    }
}
