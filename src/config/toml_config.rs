use crate::core::registry::FieldTable;
use crate::domain::model::{FieldKind, FieldRule};
use crate::utils::error::{FormError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnhancerConfig {
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub fields: Vec<FieldRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl EnhancerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FormError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn log_directive(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    /// Built-in table with this file's `[[fields]]` applied on top.
    pub fn field_table(&self) -> FieldTable {
        FieldTable::builtin().with_overrides(self.fields.iter().cloned())
    }

    pub fn validate_config(&self) -> Result<()> {
        for (i, rule) in self.fields.iter().enumerate() {
            validation::validate_element_id(&format!("fields[{}].id", i), &rule.id)?;

            if let FieldKind::Digits { max_len: Some(max) } = rule.kind {
                validation::validate_positive_number(&format!("fields[{}].max_len", i), max, 1)?;
            }
        }

        validation::validate_unique("fields.id", self.fields.iter().map(|r| r.id.as_str()))?;

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validation::validate_non_empty_string("logging.level", level)?;
            }
        }

        Ok(())
    }
}

impl Validate for EnhancerConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

/// 替換環境變數 (例如 ${FORM_LOG})
///
/// Unset variables are left as written.
pub(crate) fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FormError::ConfigValidationError {
        field: "env_substitution".to_string(),
        message: e.to_string(),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
