//! Generation options.
//!
//! `GeneratorConfig` is the loose, file-facing shape (every key optional,
//! booleans accepted as strings). `GenerationOptions` is the resolved,
//! read-only configuration a generation run works with.

use crate::error::GenerateError;
use serde::{Deserialize, Deserializer, Serialize};

/// Default merge callee for spread attributes.
pub const DEFAULT_SPREAD_FN: &str = "Object.assign";

/// Source name used in mapping entries when none is known.
pub const DEFAULT_SOURCE_FILE_NAME: &str = "original.jsx";

/// Resolved configuration for one generation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Callee used to build elements (`h`, `React.createElement`, ...).
    pub factory: String,
    /// Callee that merges attribute objects when spreads are present.
    pub spread_fn: String,
    /// Callee template for non-known tags, with `{tag}` placeholders.
    pub unknown_tag_pattern: Option<String>,
    pub pass_unknown_tags_to_factory: bool,
    pub unknown_tags_as_string: bool,
    /// Pass children as one array argument instead of trailing arguments.
    pub array_children: bool,
    pub source_file_name: String,
}

impl GenerationOptions {
    pub fn new(factory: impl Into<String>) -> Self {
        GenerationOptions {
            factory: factory.into(),
            spread_fn: DEFAULT_SPREAD_FN.to_string(),
            unknown_tag_pattern: None,
            pass_unknown_tags_to_factory: false,
            unknown_tags_as_string: false,
            array_children: true,
            source_file_name: DEFAULT_SOURCE_FILE_NAME.to_string(),
        }
    }

    pub fn with_spread_fn(mut self, spread_fn: impl Into<String>) -> Self {
        self.spread_fn = spread_fn.into();
        self
    }

    pub fn with_unknown_tag_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.unknown_tag_pattern = Some(pattern.into());
        self
    }

    pub fn with_pass_unknown_tags_to_factory(mut self, pass: bool) -> Self {
        self.pass_unknown_tags_to_factory = pass;
        self
    }

    pub fn with_unknown_tags_as_string(mut self, as_string: bool) -> Self {
        self.unknown_tags_as_string = as_string;
        self
    }

    pub fn with_array_children(mut self, array_children: bool) -> Self {
        self.array_children = array_children;
        self
    }

    pub fn with_source_file_name(mut self, name: impl Into<String>) -> Self {
        self.source_file_name = name.into();
        self
    }

    /// Reject configurations a run cannot start with.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.factory.trim().is_empty() {
            return Err(GenerateError::MissingFactory);
        }
        Ok(())
    }

    /// Build options from a loaded configuration, applying defaults.
    pub fn resolve(config: &GeneratorConfig) -> Result<Self, GenerateError> {
        let factory = config
            .factory
            .as_deref()
            .map(str::trim)
            .filter(|factory| !factory.is_empty())
            .ok_or(GenerateError::MissingFactory)?;

        let mut options = GenerationOptions::new(factory);
        if let Some(spread_fn) = &config.spread_fn {
            options.spread_fn = spread_fn.clone();
        }
        options.unknown_tag_pattern = config.unknown_tag_pattern.clone();
        if let Some(pass) = config.pass_unknown_tags_to_factory {
            options.pass_unknown_tags_to_factory = pass;
        }
        if let Some(as_string) = config.unknown_tags_as_string {
            options.unknown_tags_as_string = as_string;
        }
        if let Some(array_children) = config.array_children {
            options.array_children = array_children;
        }
        if let Some(name) = &config.source_file_name {
            options.source_file_name = name.clone();
        }
        Ok(options)
    }
}

/// Custom deserializer that accepts both bool and string values.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

/// Configuration as read from a JSON file or assembled from flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    #[serde(default)]
    pub factory: Option<String>,
    #[serde(default)]
    pub spread_fn: Option<String>,
    #[serde(default)]
    pub unknown_tag_pattern: Option<String>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub pass_unknown_tags_to_factory: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub unknown_tags_as_string: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub array_children: Option<bool>,
    #[serde(default, alias = "filename")]
    pub source_file_name: Option<String>,
    /// Extension allow-list for file transforms.
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
}

impl GeneratorConfig {
    pub fn from_json_str(text: &str) -> Result<Self, GenerateError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Layer `overrides` on top of `self`; keys set in `overrides` win.
    pub fn merge(self, overrides: GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            factory: overrides.factory.or(self.factory),
            spread_fn: overrides.spread_fn.or(self.spread_fn),
            unknown_tag_pattern: overrides.unknown_tag_pattern.or(self.unknown_tag_pattern),
            pass_unknown_tags_to_factory: overrides
                .pass_unknown_tags_to_factory
                .or(self.pass_unknown_tags_to_factory),
            unknown_tags_as_string: overrides
                .unknown_tags_as_string
                .or(self.unknown_tags_as_string),
            array_children: overrides.array_children.or(self.array_children),
            source_file_name: overrides.source_file_name.or(self.source_file_name),
            extensions: overrides.extensions.or(self.extensions),
        }
    }
}
