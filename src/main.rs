use accounts_sql::config::Config;
use accounts_sql::process::{render_summary, run_import};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// 把账号导出文本转换为 SQL upsert 语句
#[derive(Parser, Debug)]
#[command(name = "accounts-sql-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 账号导出文本路径
    input: Option<PathBuf>,

    /// SQL 输出路径（会被覆盖）
    output: Option<PathBuf>,

    /// 同时导出 JSON 数组到该路径
    #[arg(long)]
    json: Option<PathBuf>,

    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 开头和结尾各预览多少条记录
    #[arg(long)]
    preview: Option<usize>,

    /// 输出 debug 级别日志
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// 命令行参数覆盖配置文件
    fn into_config(self) -> Result<Config> {
        let mut config = match self.config.as_ref() {
            Some(path) => Config::from_file(path).with_context(|| {
                format!("加载配置文件失败: {}", path.display())
            })?,
            None => Config::default(),
        };

        if let Some(input) = self.input {
            config.import.input_path = input;
        }
        if let Some(output) = self.output {
            config.import.output_path = output;
        }
        if self.json.is_some() {
            config.import.json_out_path = self.json;
        }
        if let Some(preview) = self.preview {
            config.import.preview_count = preview;
        }
        if self.verbose {
            config.log.level = "debug".to_string();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "logging")]
fn setup_logging(config: &Config) -> Result<()> {
    use accounts_sql::logging::{LogConfig, init_logging, parse_level};

    let mut log_config = LogConfig::new()
        .level(parse_level(&config.log.level)?)
        .enable_console(config.log.enable_console);
    if let Some(dir) = config.log.log_dir.as_ref() {
        log_config = log_config.log_dir(dir);
    }
    init_logging(log_config)?;
    Ok(())
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;

    #[cfg(feature = "logging")]
    setup_logging(&config)?;

    let summary = run_import(&config.import).with_context(|| {
        format!("导入失败: {}", config.import.input_path.display())
    })?;

    print!("{}", render_summary(&summary));
    Ok(())
}
