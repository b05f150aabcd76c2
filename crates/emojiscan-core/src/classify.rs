//! 单行字符分类（启发式：码点 > 127 即视为可疑字符）
//!
//! 注意：这不是真正的 emoji 识别。带重音的拉丁字母、弯引号、破折号等
//! 非 ASCII 字符同样会被命中，这是约定行为，不要“顺手修复”。

/// 字符判定函数：返回 true 表示该字符需要上报
pub type CharPredicate = fn(char) -> bool;

/// 默认判定：码点严格大于 127
pub fn is_non_ascii(c: char) -> bool {
    c as u32 > 127
}

/// 使用默认判定扫描一行，返回第一个命中的字符
pub fn classify(line: &str) -> Option<char> {
    classify_with(line, is_non_ascii)
}

/// 使用自定义判定扫描一行（从左到右，首个命中即返回）
pub fn classify_with(line: &str, predicate: CharPredicate) -> Option<char> {
    line.chars().find(|&c| predicate(c))
}
