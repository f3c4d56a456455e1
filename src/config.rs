use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// Names under which the coordinator publishes board activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoordinatorConfig {
    pub card_moved_variable: String,
    pub card_moved_event: String,
    pub add_card_variable: String,
    pub add_card_event: String,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            card_moved_variable: "lastCardMovement".to_string(),
            card_moved_event: "onCardMoved".to_string(),
            add_card_variable: "lastAddCardClickDetails".to_string(),
            add_card_event: "onAddCardClicked".to_string(),
        }
    }
}

impl CoordinatorConfig {
    /// Parses a JSON config; missing keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let names = [
            ("cardMovedVariable", &self.card_moved_variable),
            ("cardMovedEvent", &self.card_moved_event),
            ("addCardVariable", &self.add_card_variable),
            ("addCardEvent", &self.add_card_event),
        ];
        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(BoardError::ConfigError(format!("{} must not be empty", key)));
            }
        }
        Ok(())
    }
}
