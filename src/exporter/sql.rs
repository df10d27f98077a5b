//! SQL upsert 导出器
//!
//! 每条账号记录生成一行 `INSERT ... ON DUPLICATE KEY UPDATE` 语句（MySQL 方言）。
//! 语句先写入同目录下的 `<输出文件名>.tmp`，`finalize` 成功后再重命名为目标文件，
//! 中途失败不会在目标路径留下半截文件（见 `staged` 模块）。

use super::SyncExporter;
use super::staged::StagedFile;
use crate::account::AccountRecord;
use crate::error::Result;
use crate::exporter::ExportStats;
use std::io::Write;
use std::path::Path;

/// 目标表名
pub const TABLE_NAME: &str = "created_accounts";

/// 插入的列，顺序与 VALUES 保持一致
pub const COLUMNS: [&str; 11] = [
    "email",
    "username",
    "password",
    "age",
    "gender",
    "referenceCode",
    "inviteCodeUsed",
    "emailVerified",
    "codeApplied",
    "createdAt",
    "updatedAt",
];

/// 转义 SQL 字符串字面量：单引号加倍
pub fn escape_sql_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// 可选字符串字段转为字面量内容，`None` 写成空字符串而不是 NULL
fn optional_literal(value: Option<&str>) -> String {
    value.map(escape_sql_literal).unwrap_or_default()
}

/// 把一条记录格式化为 upsert 语句
///
/// `codeApplied` 固定为 0，`createdAt`/`updatedAt` 使用 `NOW()`，由数据库执行时求值。
pub fn format_statement(record: &AccountRecord) -> String {
    format!(
        "INSERT INTO {table} ({columns}) VALUES ('{email}', '{username}', '{password}', {age}, '{gender}', '{reference_code}', '{invite_code_used}', {email_verified}, 0, NOW(), NOW()) ON DUPLICATE KEY UPDATE updatedAt = NOW();",
        table = TABLE_NAME,
        columns = COLUMNS.join(", "),
        email = escape_sql_literal(&record.email),
        username = optional_literal(record.username.as_deref()),
        password = optional_literal(record.password.as_deref()),
        age = record.age_or_default(),
        gender = optional_literal(record.gender.as_deref()),
        reference_code = escape_sql_literal(&record.reference_code),
        invite_code_used = optional_literal(record.invite_code_used.as_deref()),
        email_verified = u8::from(record.email_verified),
    )
}

/// 批量格式化，顺序与输入一致
pub fn format_statements(records: &[AccountRecord]) -> Vec<String> {
    records.iter().map(format_statement).collect()
}

/// 同步 SQL 导出器
pub struct SqlExporter {
    staged: StagedFile,
    stats: ExportStats,
}

impl SqlExporter {
    /// 创建新的 SQL 导出器，目标文件在 `finalize` 时才会被覆盖
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self { staged: StagedFile::create(path)?, stats: ExportStats::new() })
    }
}

impl SyncExporter for SqlExporter {
    fn name(&self) -> &str {
        "SQL"
    }

    fn export_record(&mut self, record: &AccountRecord) -> Result<()> {
        let statement = format_statement(record);
        let writer = self.staged.writer()?;
        writer.write_all(statement.as_bytes())?;
        writer.write_all(b"\n")?;
        self.stats.exported_records += 1;
        Ok(())
    }

    fn prepare(&mut self) -> Result<()> {
        if self.staged.is_flushed() {
            return Ok(());
        }
        self.staged.flush()?;
        self.stats.finish();
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.prepare()?;
        self.staged.commit()?;

        #[cfg(feature = "logging")]
        tracing::info!(
            "SQL导出完成: {} 条语句写入 {}",
            self.stats.exported_records,
            self.staged.path().display()
        );

        Ok(())
    }

    fn get_stats(&self) -> ExportStats {
        self.stats.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> AccountRecord {
        AccountRecord {
            date: Some("12/03/2025 14:22".into()),
            reference_code: "ABC123".into(),
            email: "ana@example.com".into(),
            username: Some("Ana".into()),
            password: Some("pw".into()),
            age: Some(27),
            gender: Some("feminino".into()),
            invite_code_used: Some("6247C5".into()),
            email_verified: true,
        }
    }

    #[test]
    fn test_format_full_statement() {
        assert_eq!(
            format_statement(&sample()),
            "INSERT INTO created_accounts (email, username, password, age, gender, referenceCode, inviteCodeUsed, emailVerified, codeApplied, createdAt, updatedAt) VALUES ('ana@example.com', 'Ana', 'pw', 27, 'feminino', 'ABC123', '6247C5', 1, 0, NOW(), NOW()) ON DUPLICATE KEY UPDATE updatedAt = NOW();"
        );
    }

    #[test]
    fn test_format_defaults() {
        let record = AccountRecord::new("ABC123", "a@x.com");
        let sql = format_statement(&record);
        assert!(sql.contains(
            "VALUES ('a@x.com', '', '', 18, '', 'ABC123', '', 0, 0, NOW(), NOW())"
        ));
    }

    #[test]
    fn test_zero_age_is_kept() {
        // 只有缺失的年龄才取默认值，0 原样写出
        let mut record = AccountRecord::new("ABC123", "a@x.com");
        record.age = Some(0);
        let sql = format_statement(&record);
        assert!(sql.contains("VALUES ('a@x.com', '', '', 0, ''"));
    }

    #[test]
    fn test_prepare_does_not_replace_target() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("import.sql");
        std::fs::write(&out, "previous\n").unwrap();

        let mut exporter = SqlExporter::new(&out).unwrap();
        exporter.export_record(&sample()).unwrap();
        exporter.prepare().unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "previous\n");

        exporter.finalize().unwrap();
        assert!(std::fs::read_to_string(&out).unwrap().starts_with("INSERT INTO"));
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_sql_literal("O'Brien"), "O''Brien");
        assert_eq!(escape_sql_literal("''"), "''''");
        assert_eq!(escape_sql_literal("plain"), "plain");

        let mut record = sample();
        record.username = Some("D'Ávila".into());
        let sql = format_statement(&record);
        assert!(sql.contains("'D''Ávila'"));
        assert_eq!(sql.matches('\'').count() % 2, 0);
    }

    #[test]
    fn test_format_statements_keeps_order() {
        let a = AccountRecord::new("A", "a@x.com");
        let b = AccountRecord::new("B", "b@x.com");
        let statements = format_statements(&[a, b]);
        assert_eq!(statements.len(), 2);
        assert!(statements[0].contains("'A'"));
        assert!(statements[1].contains("'B'"));
    }

    #[test]
    fn test_export_writes_one_line_per_record() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("import.sql");

        let mut exporter = SqlExporter::new(&out).unwrap();
        exporter
            .export_batch(&[sample(), AccountRecord::new("B", "b@x.com")])
            .unwrap();
        // 完成前目标文件不存在
        assert!(!out.exists());
        exporter.finalize().unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(content.ends_with(";\n"));
        assert!(!dir.path().join("import.sql.tmp").exists());
        assert_eq!(exporter.get_stats().exported_records, 2);
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("import.sql");
        std::fs::write(&out, "old content\nmore\nlines\n").unwrap();

        let mut exporter = SqlExporter::new(&out).unwrap();
        exporter.export_record(&sample()).unwrap();
        exporter.finalize().unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert!(!content.contains("old content"));
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_drop_without_finalize_keeps_target() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("import.sql");
        std::fs::write(&out, "previous\n").unwrap();

        {
            let mut exporter = SqlExporter::new(&out).unwrap();
            exporter.export_record(&sample()).unwrap();
        }

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "previous\n");
        assert!(!dir.path().join("import.sql.tmp").exists());
    }

    #[test]
    fn test_write_after_finalize_fails() {
        let dir = TempDir::new().unwrap();
        let mut exporter = SqlExporter::new(dir.path().join("x.sql")).unwrap();
        exporter.finalize().unwrap();
        assert!(exporter.export_record(&sample()).is_err());
        // 重复 finalize 不报错
        assert!(exporter.finalize().is_ok());
    }

    #[test]
    fn test_unwritable_output_fails() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("missing_dir").join("import.sql");
        let err = SqlExporter::new(&out).err().unwrap();
        assert!(err.is_io_error());
    }
}
