//! 扫描主流程：遍历目录 → 后缀过滤 → UTF-8 解码 → 逐行分类 → 输出报告
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::classify::{classify_with, CharPredicate};
use crate::error::ScanError;
use crate::findings::Finding;
use crate::options::{ScanOptions, ScanStats};
use crate::report;

/// 一次扫描的结果
#[derive(Debug, Default, Clone)]
pub struct ScanOutcome {
    /// 命中的文件（遍历顺序，每个文件最多一次）
    pub flagged: Vec<PathBuf>,
    pub stats: ScanStats,
}

/// 扫描目录并将报告写入 `out`
/// - 根目录不存在时视为空目录：只输出起始行，无命中
/// - 单个文件读取失败只记录，不中断扫描
/// - 仅当写 `out` 失败时返回错误
pub fn scan(root: &Path, out: &mut dyn Write, opts: &ScanOptions) -> Result<ScanOutcome> {
    report::write_start(out, root).context("write report")?;

    let mut outcome = ScanOutcome::default();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!(%err, "skipping unreadable entry");
                continue;
            }
        };
        // 指向目录的符号链接不展开，也不当作文件
        if entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir()) {
            continue;
        }
        outcome.stats.files_visited += 1;

        let name = entry.file_name().to_string_lossy();
        if !opts.matches_name(&name) {
            continue;
        }

        let path = entry.path();
        debug!(path = %path.display(), "scanning file");
        match scan_file(path, opts.predicate) {
            Ok(Some(finding)) => {
                outcome.stats.files_scanned += 1;
                outcome.stats.findings += 1;
                report::write_finding(out, &finding).context("write report")?;
                outcome.flagged.push(finding.path);
            }
            Ok(None) => outcome.stats.files_scanned += 1,
            Err(err) => {
                outcome.stats.read_errors += 1;
                warn!(path = %path.display(), %err, "failed to read file");
                report::write_read_error(out, &err).context("write report")?;
            }
        }
    }

    let s = &outcome.stats;
    info!(
        files_visited = s.files_visited,
        files_scanned = s.files_scanned,
        read_errors = s.read_errors,
        findings = s.findings,
        "scan finished"
    );
    Ok(outcome)
}

/// 以默认选项扫描并输出到 stdout，返回命中文件列表
pub fn scan_files(root: &Path) -> Result<Vec<PathBuf>> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    let outcome = scan(root, &mut lock, &ScanOptions::default())?;
    lock.flush().ok();
    Ok(outcome.flagged)
}

/// 扫描单个文件，返回第一处命中（找到即停止）
pub fn scan_file(path: &Path, predicate: CharPredicate) -> Result<Option<Finding>, ScanError> {
    let bytes = std::fs::read(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = std::str::from_utf8(&bytes).map_err(|source| ScanError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    for (idx, line) in split_lines(text).into_iter().enumerate() {
        if let Some(ch) = classify_with(line, predicate) {
            return Ok(Some(Finding {
                path: path.to_path_buf(),
                line_number: idx + 1,
                line: line.to_string(),
                ch,
            }));
        }
    }
    Ok(None)
}

/// 按 `\n`、`\r\n`、单独的 `\r` 切分行（不含换行符）
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}
