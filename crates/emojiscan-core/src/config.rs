//! 配置文件加载（TOML）
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;
use crate::options::ScanOptions;

/// 顶层配置文件结构
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    extensions: Option<Vec<String>>,
}

/// 从 TOML 文件加载扫描选项；未给出的字段保持默认值
pub fn load_options(path: &Path) -> Result<ScanOptions, ConfigError> {
    let txt = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_options(&txt, path)
}

fn parse_options(txt: &str, path: &Path) -> Result<ScanOptions, ConfigError> {
    let parsed: ConfigFile = toml::from_str(txt).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let mut opts = ScanOptions::default();

    if let Some(exts) = parsed.extensions {
        if exts.is_empty() {
            return Err(ConfigError::NoExtensions { path: path.to_path_buf() });
        }
        opts.extensions = exts;
    }

    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cfg_path() -> PathBuf {
        PathBuf::from("emojiscan.toml")
    }

    #[test]
    fn empty_file_keeps_defaults() {
        let opts = parse_options("", &cfg_path()).unwrap();
        assert_eq!(opts.extensions, vec![".js", ".jsx"]);
    }

    #[test]
    fn extensions_override_defaults() {
        let opts = parse_options("extensions = [\".ts\", \".tsx\"]", &cfg_path()).unwrap();
        assert_eq!(opts.extensions, vec![".ts", ".tsx"]);
        assert!(opts.matches_name("a.tsx"));
        assert!(!opts.matches_name("a.js"));
    }

    #[test]
    fn empty_extension_list_is_rejected() {
        let err = parse_options("extensions = []", &cfg_path()).unwrap_err();
        assert!(matches!(err, ConfigError::NoExtensions { .. }));
    }

    #[test]
    fn unknown_keys_are_parse_errors() {
        let err = parse_options("extension = [\".js\"]", &cfg_path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_options(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
