use std::{fs, path::Path};

use anyhow::Result;

use super::InitSummary;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config file into `dir` unless one already exists.
pub fn init(dir: &Path) -> Result<InitSummary> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(InitSummary {
            path: config_path,
            created: false,
        });
    }

    fs::write(&config_path, default_config_json()?)?;
    Ok(InitSummary {
        path: config_path,
        created: true,
    })
}
