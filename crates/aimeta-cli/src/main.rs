use aimeta_core::{scan_and_write, OutputFormat, ScanOptions};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(
    name = "aimeta",
    version,
    about = "Detect AI-generated metadata in image files (e.g., C2PA, Adobe Content Credentials)."
)]
struct Cli {
    /// Path to the image file to scan.
    image_path: PathBuf,

    /// 输出格式：text 或 json
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// 额外指示符规则文件（TOML），追加在内置列表之后
    #[arg(long)]
    rules: Option<PathBuf>,

    /// 按结果分类返回退出码（0 未发现，1 发现，2 不存在，3 无权限，4 IO 错误，5 其他）
    #[arg(long)]
    exit_codes: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<ExitCode> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();
    info!(path = ?cli.image_path, rules = ?cli.rules, "starting scan");

    let opts = ScanOptions { rules_path: cli.rules, format: cli.format.into() };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let outcome = scan_and_write(&cli.image_path, &mut out, &opts).context("scan and write failed")?;
    out.flush().context("flush report")?;

    info!(?outcome, "scan finished");
    if cli.exit_codes {
        return Ok(exit_code(outcome.exit_code()));
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，stdout 只输出报告
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
