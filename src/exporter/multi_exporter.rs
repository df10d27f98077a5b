//! 多导出器管理模块
//!
//! 把同一批记录依次交给所有导出器。任何一个导出器出错都会中止整个导出，
//! 写文件失败属于致命错误。完成时分两步：所有导出器都落盘成功后才逐个替换目标文件。

use super::SyncExporter;
use crate::account::AccountRecord;
use crate::error::Result;
use crate::exporter::ExportStats;

/// 多导出器管理器
#[derive(Default)]
pub struct MultiExporter {
    exporters: Vec<Box<dyn SyncExporter>>,
}

impl MultiExporter {
    /// 创建新的多导出器
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加导出器
    pub fn add_exporter<E>(&mut self, exporter: E)
    where
        E: SyncExporter + 'static,
    {
        #[cfg(feature = "logging")]
        tracing::debug!("添加导出器: {}", exporter.name());
        self.exporters.push(Box::new(exporter));
    }

    /// 导出器数量
    pub fn len(&self) -> usize {
        self.exporters.len()
    }

    /// 是否没有任何导出器
    pub fn is_empty(&self) -> bool {
        self.exporters.is_empty()
    }

    /// 批量导出到所有导出器
    pub fn export_batch(&mut self, records: &[AccountRecord]) -> Result<()> {
        for exporter in &mut self.exporters {
            exporter.export_batch(records)?;
        }
        Ok(())
    }

    /// 完成所有导出器
    pub fn finalize_all(&mut self) -> Result<()> {
        for exporter in &mut self.exporters {
            exporter.prepare()?;
        }
        for exporter in &mut self.exporters {
            exporter.finalize()?;
        }
        Ok(())
    }

    /// 各导出器的统计信息，按添加顺序
    pub fn get_all_stats(&self) -> Vec<(String, ExportStats)> {
        self.exporters
            .iter()
            .map(|e| (e.name().to_string(), e.get_stats()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImportError;

    #[derive(Default)]
    struct CountingExporter {
        seen: Vec<String>,
        finalized: bool,
        fail: bool,
        fail_prepare: bool,
    }

    impl SyncExporter for CountingExporter {
        fn name(&self) -> &str {
            "counting"
        }

        fn export_record(&mut self, record: &AccountRecord) -> Result<()> {
            if self.fail {
                return Err(ImportError::other("写入失败"));
            }
            self.seen.push(record.reference_code.clone());
            Ok(())
        }

        fn prepare(&mut self) -> Result<()> {
            if self.fail_prepare {
                return Err(ImportError::other("落盘失败"));
            }
            Ok(())
        }

        fn finalize(&mut self) -> Result<()> {
            self.finalized = true;
            Ok(())
        }

        fn get_stats(&self) -> ExportStats {
            ExportStats { exported_records: self.seen.len(), ..Default::default() }
        }
    }

    #[test]
    fn test_fan_out_to_every_exporter() {
        let mut multi = MultiExporter::new();
        assert!(multi.is_empty());
        multi.add_exporter(CountingExporter::default());
        multi.add_exporter(CountingExporter::default());
        assert_eq!(multi.len(), 2);

        let records = [
            AccountRecord::new("A", "a@x.com"),
            AccountRecord::new("B", "b@x.com"),
        ];
        multi.export_batch(&records).unwrap();
        multi.finalize_all().unwrap();

        let stats = multi.get_all_stats();
        assert_eq!(stats.len(), 2);
        assert!(stats.iter().all(|(name, s)| name == "counting"
            && s.exported_records == 2));
    }

    #[test]
    fn test_error_aborts_export() {
        let mut multi = MultiExporter::new();
        multi.add_exporter(CountingExporter { fail: true, ..Default::default() });
        let result = multi.export_batch(&[AccountRecord::new("A", "a@x.com")]);
        assert!(result.unwrap_err().is_other_error());
    }

    /// 记录每个导出器是否被 finalize
    struct Tracked {
        inner: CountingExporter,
        finalized: std::rc::Rc<std::cell::Cell<bool>>,
    }

    impl SyncExporter for Tracked {
        fn name(&self) -> &str {
            self.inner.name()
        }

        fn export_record(&mut self, record: &AccountRecord) -> Result<()> {
            self.inner.export_record(record)
        }

        fn prepare(&mut self) -> Result<()> {
            self.inner.prepare()
        }

        fn finalize(&mut self) -> Result<()> {
            self.inner.finalize()?;
            self.finalized.set(self.inner.finalized);
            Ok(())
        }
    }

    #[test]
    fn test_prepare_failure_finalizes_nothing() {
        let first = std::rc::Rc::new(std::cell::Cell::new(false));
        let second = std::rc::Rc::new(std::cell::Cell::new(false));

        let mut multi = MultiExporter::new();
        multi.add_exporter(Tracked {
            inner: CountingExporter::default(),
            finalized: first.clone(),
        });
        multi.add_exporter(Tracked {
            inner: CountingExporter { fail_prepare: true, ..Default::default() },
            finalized: second.clone(),
        });

        multi.export_batch(&[AccountRecord::new("A", "a@x.com")]).unwrap();
        assert!(multi.finalize_all().unwrap_err().is_other_error());
        assert!(!first.get());
        assert!(!second.get());
    }
}
