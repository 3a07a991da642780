//! User configuration — listing defaults and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/shelltree/config.toml` (default `~/.config/shelltree/config.toml`).

use std::path::PathBuf;

/// Application configuration — defaults applied when CLI flags are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Root directory used when `--root` is not given.
    pub default_root: Option<PathBuf>,
    /// Extension filter applied to `list` when no `--ext` is given.
    pub extensions: Vec<String>,
}

impl AppConfig {
    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                return Self::parse(&contents);
            }
        }
        Self::default()
    }

    /// Parse the key-value file.  Unknown keys, comments, and malformed
    /// lines are skipped rather than rejected.
    fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "default_root" if !value.is_empty() => {
                    config.default_root = Some(PathBuf::from(value));
                }
                "extensions" => {
                    config.extensions = value
                        .split(',')
                        .map(|ext| ext.trim().trim_matches('"').to_string())
                        .filter(|ext| !ext.is_empty())
                        .collect();
                }
                _ => {}
            }
        }

        config
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/shelltree/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("shelltree").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_both_keys() {
        let config = AppConfig::parse(
            "# shelltree configuration\n\
             default_root = /srv/projects\n\
             extensions = .txt, .md\n",
        );
        assert_eq!(config.default_root, Some(PathBuf::from("/srv/projects")));
        assert_eq!(config.extensions, vec![".txt", ".md"]);
    }

    #[test]
    fn parse_skips_junk_lines() {
        let config = AppConfig::parse(
            "[section]\n\
             not a key value pair\n\
             unknown_key = whatever\n",
        );
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn empty_values_leave_defaults() {
        let config = AppConfig::parse("default_root =\nextensions = ,\n");
        assert_eq!(config.default_root, None);
        assert!(config.extensions.is_empty());
    }
}
