use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{encoding::encoding_for_label, ignore::IgnoreSet};

pub const CONFIG_FILE_NAME: &str = ".transcheckrc.json";

/// Directory of the string tables inside a mod, relative to the mod root.
pub const DEFAULT_STRING_SUBDIR: &str = "media/lua/shared/Translate";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_base_locale")]
    pub base_locale: String,
    /// Warning codes suppressed for the whole run.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Locale → encoding label overrides.
    #[serde(default)]
    pub encodings: BTreeMap<String, String>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_string_subdir")]
    pub string_subdir: String,
}

fn default_base_locale() -> String {
    "EN".to_string()
}

fn default_string_subdir() -> String {
    DEFAULT_STRING_SUBDIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_locale: default_base_locale(),
            ignore: Vec::new(),
            encodings: BTreeMap::new(),
            strict: false,
            string_subdir: default_string_subdir(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the base locale is empty or an encoding label is
    /// unknown.
    pub fn validate(&self) -> Result<()> {
        if self.base_locale.trim().is_empty() {
            bail!("'baseLocale' must not be empty");
        }

        for (locale, label) in &self.encodings {
            if encoding_for_label(label).is_none() {
                bail!(
                    "Unknown encoding in 'encodings': \"{}\" for locale \"{}\"",
                    label,
                    locale
                );
            }
        }

        Ok(())
    }

    /// Process-wide suppression set.
    pub fn ignore_set(&self) -> IgnoreSet {
        IgnoreSet::from_codes(&self.ignore)
    }

    /// Root directory of the string tables for a mod.
    pub fn string_root(&self, mod_path: &Path) -> PathBuf {
        mod_path.join(&self.string_subdir)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::issues::WarningCode;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_locale, "EN");
        assert!(config.ignore.is_empty());
        assert!(config.encodings.is_empty());
        assert!(!config.strict);
        assert_eq!(config.string_subdir, DEFAULT_STRING_SUBDIR);
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "baseLocale": "FR",
              "ignore": ["identical", "missing_file"],
              "encodings": { "RU": "cp1251" },
              "strict": true,
              "stringSubdir": "Translate"
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_locale, "FR");
        assert_eq!(config.ignore, vec!["identical", "missing_file"]);
        assert_eq!(config.encodings.get("RU").map(String::as_str), Some("cp1251"));
        assert!(config.strict);
        assert_eq!(config.string_subdir, "Translate");
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{ "strict": true }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert!(config.strict);
        assert_eq!(config.base_locale, default_base_locale());
        assert_eq!(config.string_subdir, default_string_subdir());
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("mods").join("MyMod");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert!(found.is_some());
        assert_eq!(found.unwrap(), config_path);
    }

    #[test]
    fn test_find_config_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let found = find_config_file(dir.path());
        assert!(found.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_path, r#"{ "ignore": ["extra"] }"#).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert!(result.config.ignore_set().contains(WarningCode::Extra));
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert_eq!(result.config.base_locale, "EN");
    }

    #[test]
    fn test_validate_unknown_encoding() {
        let config = Config {
            encodings: [("FR".to_string(), "cp9999".to_string())].into_iter().collect(),
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cp9999"));
    }

    #[test]
    fn test_validate_empty_base_locale() {
        let config = Config {
            base_locale: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_config_with_invalid_encoding_fails() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "encodings": { "FR": "nope" } }"#,
        )
        .unwrap();

        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn test_string_root() {
        let config = Config::default();
        assert_eq!(
            config.string_root(Path::new("/mods/MyMod")),
            Path::new("/mods/MyMod/media/lua/shared/Translate")
        );
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let json = default_config_json().unwrap();
        assert!(json.contains("baseLocale"));
        assert!(json.contains("stringSubdir"));
        assert!(!json.contains("base_locale"));
    }
}
