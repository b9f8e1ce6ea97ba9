use crate::config::toml_config::substitute_env_vars;
use crate::domain::model::{ScriptedEvent, SubmenuItem};
use crate::utils::error::{FormError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A page as the server would render it, plus what the user does on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageFixture {
    #[serde(default)]
    pub fields: Vec<FieldFixture>,
    #[serde(default)]
    pub submenus: Vec<SubmenuItem>,
    #[serde(default)]
    pub events: Vec<ScriptedEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldFixture {
    pub id: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub read_only: bool,
}

impl PageFixture {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FormError::ConfigValidationError {
            field: "page".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for PageFixture {
    fn validate(&self) -> Result<()> {
        for (i, field) in self.fields.iter().enumerate() {
            validation::validate_element_id(&format!("fields[{}].id", i), &field.id)?;
        }
        validation::validate_unique("fields.id", self.fields.iter().map(|f| f.id.as_str()))?;

        for (i, event) in self.events.iter().enumerate() {
            match event {
                ScriptedEvent::Input { id, value } => {
                    validation::validate_non_empty_string(&format!("events[{}].id", i), id)?;
                    validation::validate_required_field(&format!("events[{}].value", i), value)?;
                }
                ScriptedEvent::Blur { id } => {
                    validation::validate_non_empty_string(&format!("events[{}].id", i), id)?;
                }
                // 超出範圍的點擊在執行時忽略
                ScriptedEvent::Click { .. } => {}
            }
        }

        Ok(())
    }
}
