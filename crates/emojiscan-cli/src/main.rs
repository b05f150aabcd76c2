use anyhow::{Context, Result};
use clap::Parser;
use emojiscan_core::{load_options, scan, ScanOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）；不带参数时扫描 ./src
#[derive(Parser, Debug)]
#[command(name = "emojiscan", version, about = "Find non-ASCII characters (likely stray emoji) in script files")]
struct Cli {
    /// 扫描根目录
    #[arg(default_value = "./src")]
    root: PathBuf,

    /// 文件名后缀（可重复），覆盖默认的 .js/.jsx 与配置文件
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// 配置文件路径（TOML）
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // 初始化日志（RUST_LOG 控制等级，输出到 stderr，stdout 只留扫描报告）
    init_tracing();
    let cli = Cli::parse();

    let mut opts = match &cli.config {
        Some(path) => load_options(path).context("load config")?,
        None => ScanOptions::default(),
    };
    if !cli.extensions.is_empty() {
        opts.extensions = cli.extensions;
    }
    info!(root = ?cli.root, extensions = ?opts.extensions, "starting scan");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    // 命中只用于展示，不影响退出码
    let outcome = scan(&cli.root, &mut out, &opts).context("scan failed")?;
    out.flush().context("flush stdout")?;

    info!(flagged = outcome.flagged.len(), "done");
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
