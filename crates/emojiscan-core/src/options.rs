//! 扫描选项与统计信息（模块）
use crate::classify::{is_non_ascii, CharPredicate};

/// 默认扫描的文件后缀（大小写敏感，按文件名后缀匹配）
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".jsx"];

/// 扫描选项
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// 文件名后缀列表，例如 ".js"
    pub extensions: Vec<String>,
    /// 字符判定函数；默认码点 > 127
    pub predicate: CharPredicate,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            predicate: is_non_ascii,
        }
    }
}

impl ScanOptions {
    /// 文件名是否以任一后缀结尾
    pub fn matches_name(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub files_visited: usize,
    pub files_scanned: usize,
    pub read_errors: usize,
    pub findings: usize,
}
