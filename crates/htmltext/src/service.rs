//! Conversion entry points.

use htmltext_core::{process_whitespace_newlines, render_document, render_to_text};

use crate::charset;
use crate::preprocess::{preprocess, Preprocessed};
use crate::{Config, Node, RenderContext, Result};

/// Convert HTML markup to plain text.
///
/// Fails only when the markup cannot be loaded into a document; empty input
/// gives an empty string.
pub fn convert(markup: &str, config: &Config) -> Result<String> {
    let Preprocessed {
        document,
        is_office_document,
    } = preprocess(markup)?;

    let ctx = RenderContext::new(config, is_office_document);
    let output = render_document(&document, ctx);

    Ok(process_whitespace_newlines(&output))
}

/// Decode raw bytes according to `config.character_set`, then convert.
pub fn convert_bytes(bytes: &[u8], config: &Config) -> Result<String> {
    let markup = charset::decode(bytes, &config.character_set)?;
    convert(&markup, config)
}

/// Convert an already built tree
pub fn convert_node(node: &Node, config: &Config) -> String {
    render_to_text(node, config)
}

/// Converter holding a [`Config`]
#[derive(Debug, Clone, Default)]
pub struct HtmlTextService {
    config: Config,
}

impl HtmlTextService {
    /// Create a service with the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service with a custom config
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get the current config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable access to the config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Convert HTML markup to plain text
    pub fn convert(&self, markup: &str) -> Result<String> {
        convert(markup, &self.config)
    }

    /// Convert raw bytes to plain text
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<String> {
        convert_bytes(bytes, &self.config)
    }

    /// Convert an already built tree
    pub fn convert_node(&self, node: &Node) -> String {
        convert_node(node, &self.config)
    }
}
