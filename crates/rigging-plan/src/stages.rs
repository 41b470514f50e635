//! Whole-build stage chain: cross-cutting stages not tied to a single
//! file pattern. Order is semantically significant and checked by
//! [`crate::validation`] rather than relied on by convention.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::env::{Environment, Overrides};
use crate::mode::Mode;
use crate::rules::loaders;

/// Stage names, shared with the validation layer.
pub mod stage_names {
    pub const CIRCULAR_DEPENDENCY: &str = "circular-dependency";
    pub const DOTENV: &str = "dotenv";
    pub const LOCALE_NARROWING: &str = "locale-narrowing";
    pub const BUNDLE_ANALYZER: &str = "bundle-analyzer";
    pub const CLEAN_OUTPUT: &str = "clean-output";
    pub const HTML_TEMPLATE: &str = "html-template";
    pub const CSS_EXTRACT: &str = "css-extract";
}

/// Loaders that are backed by a registered stage; a rule referencing one
/// of these without the stage in the chain is a construction error.
pub const STAGE_BACKED_LOADERS: &[&str] = &[loaders::EXTRACT];

/// One whole-build stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDescriptor {
    pub name: String,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, Value>,

    /// Loader names this stage makes available to the rule table. The
    /// dependency is declared here explicitly so the emitter can check it
    /// instead of trusting array positions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provides: Vec<String>,
}

impl StageDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: IndexMap::new(),
            provides: Vec::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn provides(mut self, loader: impl Into<String>) -> Self {
        self.provides.push(loader.into());
        self
    }
}

/// The ordered chain of whole-build stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginChain {
    stages: Vec<StageDescriptor>,
}

/// Markup minification options, applied identically in both modes.
///
/// Serving minified markup in development looks like an oversight but is
/// the observed production behavior; it is preserved exactly. Do not make
/// this mode-conditional without an explicit product requirement.
pub fn html_minify_options() -> Value {
    json!({
        "removeComments": true,
        "useShortDoctype": true,
        "removeEmptyAttributes": true,
        "removeStyleLinkTypeAttributes": true,
        "keepClosingSlash": true,
        "minifyJS": true,
        "minifyCSS": true,
        "minifyURLs": true,
    })
}

impl PluginChain {
    /// Assemble the stage chain for `mode`.
    ///
    /// Ordering constraints:
    /// - the cycle detector runs first, so later stages never see a cyclic
    ///   graph silently;
    /// - the environment injector precedes every stage that reads injected
    ///   variables;
    /// - the output cleaner precedes the markup stage, so no stale
    ///   artifact survives between builds;
    /// - the extraction stage is registered before any rule references its
    ///   loader (declared via `provides`, checked at emit time).
    pub fn assemble(_mode: Mode, env: &Environment, overrides: &Overrides) -> Self {
        let mut stages = vec![
            StageDescriptor::new(stage_names::CIRCULAR_DEPENDENCY)
                .with_option("exclude", "node_modules"),
            StageDescriptor::new(stage_names::DOTENV)
                .with_option("path", env.env_file.to_string_lossy().into_owned()),
            // Size-reduction measure for the calendar dependency; not
            // mode-conditional.
            StageDescriptor::new(stage_names::LOCALE_NARROWING)
                .with_option("module", "moment/locale")
                .with_option("locales", json!(["ru", "en"])),
        ];

        // Diagnostic only; no effect on output bytes.
        if overrides.analyze {
            stages.push(StageDescriptor::new(stage_names::BUNDLE_ANALYZER));
        }

        stages.push(StageDescriptor::new(stage_names::CLEAN_OUTPUT));

        stages.push(
            StageDescriptor::new(stage_names::HTML_TEMPLATE)
                .with_option("template", "index.html")
                .with_option("minify", html_minify_options())
                .with_option("inject", true),
        );

        stages.push(
            StageDescriptor::new(stage_names::CSS_EXTRACT)
                .with_option("ignoreOrder", true)
                .with_option("filename", "css/[name].[contenthash].css")
                .with_option("chunkFilename", "css/[name].[contenthash].css")
                .provides(loaders::EXTRACT),
        );

        // Every stage is currently registered in both modes; only the
        // dotenv path (via the resolved environment) differs.
        Self { stages }
    }

    pub fn from_stages(stages: Vec<StageDescriptor>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[StageDescriptor] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Position of the named stage in the chain.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.stages.iter().position(|stage| stage.name == name)
    }

    /// Whether any registered stage provides `loader`.
    pub fn provides_loader(&self, loader: &str) -> bool {
        self.stages
            .iter()
            .any(|stage| stage.provides.iter().any(|p| p == loader))
    }
}
