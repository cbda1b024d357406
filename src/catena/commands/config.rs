use crate::commands::{CmdMessage, CmdResult};
use crate::config::CatenaConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = CatenaConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in CatenaConfig::keys() {
                result.add_message(CmdMessage::info(format!("{key} = {}", config.get(key)?)));
            }
        }
        ConfigAction::ShowKey(key) => {
            result.add_message(CmdMessage::info(format!("{key} = {}", config.get(&key)?)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{key} set to {}",
                config.get(&key)?
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = tempfile::tempdir().unwrap();

        let result = run(
            dir.path(),
            ConfigAction::Set("format".into(), "json".into()),
        )
        .unwrap();
        assert_eq!(result.config.unwrap().format, OutputFormat::Json);
        assert_eq!(result.messages[0].content, "format set to json");

        let result = run(dir.path(), ConfigAction::ShowKey("format".into())).unwrap();
        assert_eq!(result.messages[0].content, "format = json");
    }

    #[test]
    fn show_all_lists_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.messages.len(), CatenaConfig::keys().len());
    }

    #[test]
    fn unknown_key_fails_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), ConfigAction::Set("colour".into(), "red".into())).is_err());
        assert!(!dir.path().join("config.json").exists());
    }
}
