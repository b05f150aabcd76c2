//! 控制台报告格式（逐行输出，下游日志抓取依赖此格式，不要改动）
use std::io::{self, Write};
use std::path::Path;

use crate::error::ScanError;
use crate::findings::Finding;

/// 分隔线长度
pub const SEPARATOR_WIDTH: usize = 40;

pub fn write_start(out: &mut dyn Write, root: &Path) -> io::Result<()> {
    writeln!(out, "Scanning {}...", root.display())
}

/// 输出单个命中（四行：文件、行号与去首尾空白的内容、字符与码点、分隔线）
pub fn write_finding(out: &mut dyn Write, f: &Finding) -> io::Result<()> {
    let cp = f.code_point();
    writeln!(out, "FILE: {}", f.path.display())?;
    writeln!(out, "LINE {}: {}", f.line_number, f.line.trim())?;
    writeln!(out, "CHAR: {} (Base 10: {}, Hex: {:#x})", f.ch, cp, cp)?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

pub fn write_read_error(out: &mut dyn Write, err: &ScanError) -> io::Result<()> {
    writeln!(out, "Error reading {}: {}", err.path().display(), err)
}
