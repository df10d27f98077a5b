//! 临时文件写入
//!
//! 导出内容先写到同目录下的 `<文件名>.tmp`，`commit` 时再重命名到目标路径。
//! 没有 `commit` 就被释放时删除临时文件，目标文件保持原样。

use crate::error::{ImportError, Result};
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 先写临时文件、最后再替换目标文件的写入器
pub struct StagedFile {
    path: PathBuf,
    temp_path: PathBuf,
    writer: Option<BufWriter<File>>,
    committed: bool,
}

impl StagedFile {
    /// 创建临时文件，目标文件此时不会被改动
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let temp_path = temp_path_for(&path);
        let file = File::create(&temp_path)?;

        #[cfg(feature = "logging")]
        tracing::debug!("导出临时文件: {}", temp_path.display());

        Ok(Self {
            path,
            temp_path,
            writer: Some(BufWriter::new(file)),
            committed: false,
        })
    }

    /// 目标文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 是否已经落盘（之后不能再写入）
    pub fn is_flushed(&self) -> bool {
        self.writer.is_none()
    }

    /// 当前写入器，落盘之后再写入会报错
    pub fn writer(&mut self) -> Result<&mut BufWriter<File>> {
        self.writer.as_mut().ok_or_else(|| {
            ImportError::other(format!(
                "导出已经完成，不能继续写入: {}",
                self.path.display()
            ))
        })
    }

    /// 刷新缓冲并同步到磁盘，重复调用不报错
    pub fn flush(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }
        Ok(())
    }

    /// 落盘后把临时文件重命名为目标文件，重复调用不报错
    pub fn commit(&mut self) -> Result<()> {
        if self.committed {
            return Ok(());
        }
        self.flush()?;
        std::fs::rename(&self.temp_path, &self.path)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            drop(self.writer.take());
            let _ = std::fs::remove_file(&self.temp_path);
        }
    }
}

/// `out.sql` → `out.sql.tmp`
pub(crate) fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
