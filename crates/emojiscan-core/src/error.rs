//! 错误类型（thiserror）
use std::path::PathBuf;

/// 单个文件读取/解码失败；扫描器记录后继续处理下一个文件
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },
}

impl ScanError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::Read { path, .. } | ScanError::Decode { path, .. } => path,
        }
    }
}

/// 配置文件加载失败
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("config {path} lists no extensions")]
    NoExtensions { path: PathBuf },
}
