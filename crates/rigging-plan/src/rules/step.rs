//! Named transform steps with immutable option maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One named processing step in a transform chain.
///
/// Options are set at construction and never mutated afterwards; the
/// insertion-ordered map keeps serialization deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformStep {
    pub name: String,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, Value>,
}

impl TransformStep {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: IndexMap::new(),
        }
    }

    /// Builder-style option setter, used while assembling a chain.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}

/// Loader names shared between the rule table and the stage chain.
pub mod loaders {
    /// Extraction loader provided by the stylesheet-extraction stage.
    pub const EXTRACT: &str = "extract";
    pub const CACHE: &str = "cache";
    pub const TYPESCRIPT: &str = "typescript";
    pub const BABEL: &str = "babel";
    pub const CSS: &str = "css";
    pub const POSTCSS: &str = "postcss";
    pub const SASS: &str = "sass";
    pub const LESS: &str = "less";
    pub const FILE: &str = "file";
    pub const IMG: &str = "img";
    pub const URL: &str = "url";
    pub const TERSER: &str = "terser";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn options_preserve_insertion_order() {
        let step = TransformStep::new("less")
            .with_option("sourceMap", true)
            .with_option("javascriptEnabled", true)
            .with_option("modifyVars", json!({"primary-color": "#0081D1"}));

        let keys: Vec<_> = step.options.keys().map(String::as_str).collect();
        assert_eq!(keys, ["sourceMap", "javascriptEnabled", "modifyVars"]);
    }

    #[test]
    fn bare_step_serializes_without_options_field() {
        let step = TransformStep::new(loaders::POSTCSS);
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"name":"postcss"}"#);
    }
}
