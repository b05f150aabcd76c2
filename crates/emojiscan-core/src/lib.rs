//! 核心扫描库：查找脚本文件中残留的非 ASCII 字符（多半是误留的 emoji）
//!
//! 设计要点：
//! - 判定规则为单个 `fn(char) -> bool`，默认“码点 > 127”，可替换为更精确的检测。
//! - 每个文件只报告第一处命中，命中后立即停止读取该文件的后续行。
//! - 报告写入调用方提供的 `Write`，命中文件列表作为返回值，不使用全局状态。
//! - 单线程顺序遍历，遍历顺序由 walkdir（即文件系统）决定，不排序。

mod classify;
mod config;
mod error;
mod findings;
mod options;
mod report;
mod scan;

pub use classify::{classify, classify_with, is_non_ascii, CharPredicate};
pub use config::load_options;
pub use error::{ConfigError, ScanError};
pub use findings::Finding;
pub use options::{ScanOptions, ScanStats, DEFAULT_EXTENSIONS};
pub use report::SEPARATOR_WIDTH;
pub use scan::{scan, scan_file, scan_files, ScanOutcome};
