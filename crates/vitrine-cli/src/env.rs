//! `.env` / `.env.local` loading

use std::path::Path;

use tracing::{debug, warn};

/// Files read in order; earlier values win because non-empty variables are never overwritten
pub const ENV_FILES: [&str; 2] = [".env", ".env.local"];

/// Parse `KEY=VALUE` lines. Blank lines, comments and lines without `=` are skipped.
pub fn parse_env(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), unquote(value.trim()).to_string()))
        })
        .collect()
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Load env files from `dir` into the process environment.
///
/// A variable that is unset or set to an empty string is filled; any other
/// value is kept. Returns the names that were actually set. Missing files
/// are ignored.
pub fn load_env_files(dir: &Path) -> Vec<String> {
    let mut applied = Vec::new();
    for name in ENV_FILES {
        let path = dir.join(name);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                continue;
            }
        };
        for (key, value) in parse_env(&content) {
            if std::env::var_os(&key).is_some_and(|v| !v.is_empty()) {
                continue;
            }
            std::env::set_var(&key, value);
            applied.push(key);
        }
        debug!("Loaded {}", path.display());
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let parsed = parse_env("# comment\n\nA=1\n  B = two words  \nnot a pair\n=orphan\n");
        assert_eq!(
            parsed,
            vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "two words".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_splits_on_first_equals_and_unquotes() {
        let parsed = parse_env("URL=\"http://x/?a=b\"\nQ='single'\nMIXED=\"open'\nE=\n");
        assert_eq!(parsed[0], ("URL".into(), "http://x/?a=b".into()));
        assert_eq!(parsed[1], ("Q".into(), "single".into()));
        assert_eq!(parsed[2], ("MIXED".into(), "\"open'".into()));
        assert_eq!(parsed[3], ("E".into(), String::new()));
    }

    #[test]
    fn test_load_never_overrides_existing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "VITRINE_TEST_ENV_A=from-env\nVITRINE_TEST_ENV_B=from-env\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join(".env.local"),
            "VITRINE_TEST_ENV_A=from-local\nVITRINE_TEST_ENV_C=from-local\n",
        )
        .unwrap();
        std::env::set_var("VITRINE_TEST_ENV_B", "preset");

        let applied = load_env_files(dir.path());

        assert_eq!(std::env::var("VITRINE_TEST_ENV_A").unwrap(), "from-env");
        assert_eq!(std::env::var("VITRINE_TEST_ENV_B").unwrap(), "preset");
        assert_eq!(std::env::var("VITRINE_TEST_ENV_C").unwrap(), "from-local");
        assert_eq!(applied, vec!["VITRINE_TEST_ENV_A", "VITRINE_TEST_ENV_C"]);
    }

    #[test]
    fn test_load_fills_empty_variables() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "VITRINE_TEST_ENV_EMPTY=from-env\nVITRINE_TEST_ENV_SET=from-env\n",
        )
        .unwrap();
        std::env::set_var("VITRINE_TEST_ENV_EMPTY", "");
        std::env::set_var("VITRINE_TEST_ENV_SET", "kept");

        let applied = load_env_files(dir.path());

        assert_eq!(std::env::var("VITRINE_TEST_ENV_EMPTY").unwrap(), "from-env");
        assert_eq!(std::env::var("VITRINE_TEST_ENV_SET").unwrap(), "kept");
        assert_eq!(applied, vec!["VITRINE_TEST_ENV_EMPTY"]);
    }

    #[test]
    fn test_missing_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_env_files(dir.path()).is_empty());
    }
}
