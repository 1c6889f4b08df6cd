//! Shared configuration loader for the blockform tools.
//!
//! `defaults/blockform.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`BlockformConfig`].

use blockform_babel::formats::HtmlFormat;
use blockform_babel::{FormatRegistry, HtmlOptions};
use blockform_core::{IdGenerator, SequentialIds, TagPolicy, TagPolicyTable, UuidIds};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/blockform.default.toml");

/// Top-level configuration consumed by blockform applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockformConfig {
    pub html: HtmlConfig,
    pub ids: IdsConfig,
    #[serde(default)]
    pub policies: BTreeMap<String, TagPolicy>,
}

/// HTML output knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub indent: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdsConfig {
    pub strategy: IdStrategy,
    pub prefix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    Uuid,
    Sequential,
}

impl BlockformConfig {
    /// Built-in policies with the configured entries merged over them.
    pub fn policy_table(&self) -> TagPolicyTable {
        self.policies
            .iter()
            .fold(TagPolicyTable::builtin(), |table, (tag, policy)| {
                table.with(tag, *policy)
            })
    }

    pub fn id_generator(&self) -> Arc<dyn IdGenerator> {
        match self.ids.strategy {
            IdStrategy::Uuid => Arc::new(UuidIds),
            IdStrategy::Sequential => Arc::new(SequentialIds::new(self.ids.prefix.clone())),
        }
    }

    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            indent: self.html.indent,
        }
    }

    /// A format registry whose formats share this configuration's policies and ids.
    pub fn registry(&self) -> FormatRegistry {
        let policies = self.policy_table();
        let ids = self.id_generator();
        let mut registry = FormatRegistry::with_policies(policies.clone(), ids.clone());
        registry.register(HtmlFormat::new(policies, ids).with_options(self.html_options()));
        registry
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BlockformConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BlockformConfig, ConfigError> {
    Loader::new().build()
}
