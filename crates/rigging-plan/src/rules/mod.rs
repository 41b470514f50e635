//! The rule table: ordered (pattern → transform chain) bindings covering
//! every recognized asset class.
//!
//! Rules are matched by testing extension patterns in table order; the
//! table is constructed so every recognized path matches exactly one rule.
//! Construction asserts that the extension sets are pairwise disjoint and
//! fails fast if a new rule would silently shadow an earlier one. A path
//! matching no rule is passed through untouched by the downstream bundler,
//! which is not an error here.

mod pattern;
mod step;

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::path::Path;

pub use pattern::{MatchPattern, Scope};
pub use step::{loaders, TransformStep};

use crate::error::{PlanError, Result};
use crate::mode::Mode;

/// Deterministic per-class identifier template for scoped stylesheet
/// classes: source name, original class name, short content hash.
pub const CSS_MODULE_IDENT: &str = "[name]_[local]-[hash:base64:5]";

/// Path-preserving output name for copied assets.
pub const COPIED_ASSET_NAME: &str = "[path][name].[ext]";

/// One binding from a file-path pattern to an ordered transform chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub pattern: MatchPattern,
    pub chain: Vec<TransformStep>,

    #[serde(default, skip_serializing_if = "is_unrestricted")]
    pub scope: Scope,
}

fn is_unrestricted(scope: &Scope) -> bool {
    scope.include.is_none() && scope.exclude.is_none()
}

impl Rule {
    pub fn new(pattern: MatchPattern, chain: Vec<TransformStep>) -> Self {
        Self {
            pattern,
            chain,
            scope: Scope::any(),
        }
    }

    pub fn scoped(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Whether a path's extension matches this rule.
    pub fn matches(&self, path: &Path) -> bool {
        self.pattern.matches(path)
    }

    /// Loader names referenced by this rule's chain.
    pub fn loaders(&self) -> impl Iterator<Item = &str> {
        self.chain.iter().map(|step| step.name.as_str())
    }
}

/// The ordered rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Build the full rule table for `mode`.
    pub fn build(mode: Mode) -> Result<Self> {
        let rules = vec![
            // TypeScript sources: cached type-stripping compile.
            Rule::new(
                MatchPattern::new(["ts", "tsx"]),
                vec![
                    TransformStep::new(loaders::CACHE),
                    TransformStep::new(loaders::TYPESCRIPT),
                ],
            )
            .scoped(Scope::sources()),
            // Sass in both accepted spellings: extract, scope class names,
            // normalize, compile.
            Rule::new(
                MatchPattern::new(["sass", "scss"]),
                vec![
                    TransformStep::new(loaders::EXTRACT),
                    TransformStep::new(loaders::CSS)
                        .with_option("modules", json!({ "localIdentName": CSS_MODULE_IDENT })),
                    TransformStep::new(loaders::POSTCSS),
                    TransformStep::new(loaders::SASS),
                ],
            ),
            // Less: same shape, plus compile-time theme overrides injected
            // at this stage only.
            Rule::new(
                MatchPattern::new(["less"]),
                vec![
                    TransformStep::new(loaders::EXTRACT),
                    TransformStep::new(loaders::CSS),
                    TransformStep::new(loaders::POSTCSS),
                    TransformStep::new(loaders::LESS)
                        .with_option("sourceMap", mode.settings().source_maps)
                        .with_option("javascriptEnabled", true)
                        .with_option(
                            "modifyVars",
                            json!({
                                "primary-color": "#0081D1",
                                "border-radius-base": "4px",
                            }),
                        ),
                ],
            ),
            // Plain stylesheets.
            Rule::new(
                MatchPattern::new(["css"]),
                vec![
                    TransformStep::new(loaders::EXTRACT),
                    TransformStep::new(loaders::CSS),
                    TransformStep::new(loaders::POSTCSS),
                ],
            ),
            // Plain JavaScript sources: cached transpile.
            Rule::new(
                MatchPattern::new(["js"]),
                vec![
                    TransformStep::new(loaders::CACHE),
                    TransformStep::new(loaders::BABEL),
                ],
            )
            .scoped(Scope::sources()),
            // Raster images: path-preserving copy, then optimization.
            Rule::new(
                MatchPattern::case_insensitive(["png", "gif", "jpg", "jpeg"]),
                vec![
                    TransformStep::new(loaders::FILE).with_option("name", COPIED_ASSET_NAME),
                    TransformStep::new(loaders::IMG),
                ],
            ),
            // Audio: copy only.
            Rule::new(
                MatchPattern::case_insensitive(["mp3"]),
                vec![TransformStep::new(loaders::FILE).with_option("name", COPIED_ASSET_NAME)],
            ),
            // Vector images are inlined or referenced, never copied; the
            // asymmetry with raster assets is deliberate.
            Rule::new(
                MatchPattern::new(["svg"]),
                vec![TransformStep::new(loaders::URL)],
            ),
            // Fonts: copy only.
            Rule::new(
                MatchPattern::new(["woff", "woff2", "eot", "ttf", "otf"]),
                vec![TransformStep::new(loaders::FILE).with_option("name", COPIED_ASSET_NAME)],
            ),
        ];

        Self::from_rules(rules)
    }

    /// Assemble a table, asserting pairwise-disjoint extension sets.
    ///
    /// Matching is first-wins, so an overlap would make the later rule
    /// dead code; that latent defect class is rejected at construction.
    pub fn from_rules(rules: Vec<Rule>) -> Result<Self> {
        let mut claimed: HashMap<String, usize> = HashMap::new();

        for (index, rule) in rules.iter().enumerate() {
            for ext in &rule.pattern.extensions {
                let key = ext.to_ascii_lowercase();
                if let Some(&first) = claimed.get(&key) {
                    return Err(PlanError::OverlappingRules {
                        extension: key,
                        first,
                        second: index,
                    });
                }
                claimed.insert(key, index);
            }
        }

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// First rule whose pattern matches `path`, in table order.
    pub fn match_path(&self, path: impl AsRef<Path>) -> Option<&Rule> {
        let path = path.as_ref();
        self.rules.iter().find(|rule| rule.matches(path))
    }

    /// Every extension the table recognizes, lowercased.
    pub fn recognized_extensions(&self) -> Vec<String> {
        self.rules
            .iter()
            .flat_map(|rule| rule.pattern.extensions.iter())
            .map(|ext| ext.to_ascii_lowercase())
            .collect()
    }
}
