//! 命中项
use std::path::PathBuf;

/// 单次命中：文件中第一处可疑字符所在的行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub path: PathBuf,
    /// 行号（从 1 开始）
    pub line_number: usize,
    /// 原始行内容（不含换行符）
    pub line: String,
    pub ch: char,
}

impl Finding {
    pub fn code_point(&self) -> u32 {
        self.ch as u32
    }
}
