use crate::commands::{CmdMessage, CmdResult, PhonebookPaths};
use crate::config::PhonebookConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &PhonebookPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = PhonebookConfig::load(&paths.root)?;
    let mut result = CmdResult::default();

    let message = match action {
        ConfigAction::ShowAll => return Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => CmdMessage::info(value),
            None => CmdMessage::error(format!("Unknown config key: {}", key)),
        },
        // Nothing is written unless the new value is accepted
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(stored) => {
                config.save(&paths.root)?;
                tracing::debug!(key = %key, value = %stored, "config updated");
                result = result.with_config(config);
                CmdMessage::success(format!("{} set to {}", key, stored))
            }
            Err(e) => CmdMessage::error(e),
        },
    };
    result.add_message(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn set_then_show() {
        let temp = tempfile::tempdir().unwrap();
        let paths = PhonebookPaths::new(temp.path());

        let result = run(&paths, ConfigAction::Set("per-page".into(), "8".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let result = run(&paths, ConfigAction::ShowKey("per-page".into())).unwrap();
        assert_eq!(result.messages[0].content, "8");
    }

    #[test]
    fn invalid_value_is_not_saved() {
        let temp = tempfile::tempdir().unwrap();
        let paths = PhonebookPaths::new(temp.path());

        let result = run(&paths, ConfigAction::Set("per-page".into(), "0".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_loaded_config() {
        let temp = tempfile::tempdir().unwrap();
        let paths = PhonebookPaths::new(temp.path());
        run(&paths, ConfigAction::Set("data-file".into(), "work.json".into())).unwrap();

        let result = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().data_file, "work.json");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn unknown_key_is_reported() {
        let temp = tempfile::tempdir().unwrap();
        let paths = PhonebookPaths::new(temp.path());
        let result = run(&paths, ConfigAction::ShowKey("nope".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }
}
