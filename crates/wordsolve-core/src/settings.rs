//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
///
/// A custom TOML is validated by `init_custom`, and the embedded default is
/// validated at build time, so parsing here only fails on a broken build.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Word list selected at startup.
    #[serde(default)]
    pub current: Option<String>,
    pub suggest: SuggestSettings,
    pub cache: CacheSettings,
    pub input: InputSettings,
    #[serde(default)]
    pub word_lists: Vec<WordListSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestSettings {
    pub prefix_limit: usize,
    pub suffix_limit: usize,
    pub containing_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    pub autocomplete_key: AutocompleteKey,
    pub autocomplete_enabled: bool,
    pub max_word_length: usize,
    /// Shorter words get no suggestions.
    pub min_query_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordListSettings {
    pub name: String,
    pub file: String,
}

/// Key that accepts the top suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutocompleteKey {
    Tab,
    Enter,
}

impl fmt::Display for AutocompleteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tab => f.write_str("tab"),
            Self::Enter => f.write_str("enter"),
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    // suffix_limit and containing_limit may be zero to switch a tier off.
    check_positive!(suggest.prefix_limit);
    check_positive!(cache.capacity);
    check_positive!(input.max_word_length);
    check_positive!(input.min_query_length);
    if s.input.min_query_length > s.input.max_word_length {
        return Err(SettingsError::InvalidValue {
            field: "input.min_query_length".to_string(),
            reason: format!(
                "must not exceed input.max_word_length ({})",
                s.input.max_word_length
            ),
        });
    }

    let mut names = HashSet::new();
    for (i, list) in s.word_lists.iter().enumerate() {
        if list.name.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: format!("word_lists[{i}].name"),
                reason: "must not be empty".to_string(),
            });
        }
        if list.file.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: format!("word_lists[{i}].file"),
                reason: "must not be empty".to_string(),
            });
        }
        if !names.insert(list.name.as_str()) {
            return Err(SettingsError::InvalidValue {
                field: format!("word_lists[{i}].name"),
                reason: format!("duplicate word list name {:?}", list.name),
            });
        }
    }

    if let Some(current) = &s.current {
        if !names.contains(current.as_str()) {
            return Err(SettingsError::InvalidValue {
                field: "current".to_string(),
                reason: format!("no word list named {current:?}"),
            });
        }
    }

    Ok(())
}
