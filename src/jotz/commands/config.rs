use super::{CmdMessage, CmdResult};
use crate::config::JotzConfig;
use crate::error::Result;
use std::path::Path;

/// What the config command should do.
#[derive(Debug, Clone)]
pub enum ConfigAction {
    /// Show the whole configuration.
    ShowAll,
    /// Show a single value.
    ShowKey(String),
    /// Set a value and persist it.
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = JotzConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = JotzConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => result.add_message(CmdMessage::error(format!(
                    "Unknown config key: {}",
                    key
                ))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = JotzConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(config_dir)?;
            let display_value = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_value
            )));
            Ok(result.with_config(config))
        }
    }
}
