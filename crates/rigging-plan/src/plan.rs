//! The resolved plan: one immutable aggregate per invocation, handed
//! read-only to the downstream bundler.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::env::{Environment, Overrides};
use crate::error::Result;
use crate::mode::Mode;
use crate::optimize::OptimizationPolicy;
use crate::output::OutputScheme;
use crate::rules::RuleTable;
use crate::stages::PluginChain;
use crate::validation;

/// Module resolution options handed to the bundler: alias table, search
/// order, extension probe order, and node-polyfill fallbacks for the
/// browser platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    pub alias: IndexMap<String, PathBuf>,
    pub modules: Vec<String>,
    pub extensions: Vec<String>,
    pub fallback: IndexMap<String, String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        let mut alias = IndexMap::new();
        alias.insert("src".to_string(), PathBuf::from("./src"));

        let mut fallback = IndexMap::new();
        fallback.insert("crypto".to_string(), "crypto-browserify".to_string());
        fallback.insert("stream".to_string(), "stream-browserify".to_string());

        Self {
            alias,
            modules: vec!["src".to_string(), "node_modules".to_string()],
            extensions: vec![".tsx".to_string(), ".ts".to_string(), ".js".to_string()],
            fallback,
        }
    }
}

/// Development-only server block consumed by the dev-server collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
    pub host: String,
    pub port: u16,
    pub hot: bool,
    pub history_api_fallback: bool,
    pub overlay: bool,
}

impl DevServerConfig {
    fn from_environment(env: &Environment) -> Self {
        Self {
            host: env.host.clone(),
            port: env.port,
            hot: true,
            history_api_fallback: true,
            overlay: true,
        }
    }
}

/// The terminal aggregate of one resolution.
///
/// Not mutated after construction; identical inputs always yield a
/// deep-equal plan (content hashes are computed downstream from asset
/// bytes and never appear here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPlan {
    pub mode: Mode,
    pub stats: String,
    pub context: PathBuf,
    pub entry: String,
    pub output: OutputScheme,

    /// Source-map strategy; development only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,

    pub resolve: ResolveOptions,
    pub rules: RuleTable,
    pub plugins: PluginChain,
    pub optimization: OptimizationPolicy,

    /// Present only in development plans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerConfig>,
}

impl ResolvedPlan {
    /// Resolve a full build plan for `mode`.
    ///
    /// Strict sequential composition of the component resolvers; each is a
    /// pure function of its inputs, so re-invoking with the same inputs is
    /// always safe and yields the same plan. Structural invariants (rule
    /// disjointness, stage ordering, loader provision) are checked before
    /// the plan is returned.
    pub fn emit(mode: Mode, overrides: &Overrides) -> Result<Self> {
        let env = Environment::resolve(mode, overrides.network.as_ref());
        debug!(%mode, host = %env.host, port = env.port, "resolving build plan");

        let output = OutputScheme::compute(mode, &env);
        let rules = RuleTable::build(mode)?;
        let plugins = PluginChain::assemble(mode, &env, overrides);
        let optimization = OptimizationPolicy::select(mode);

        let dev_server = mode
            .is_development()
            .then(|| DevServerConfig::from_environment(&env));
        let devtool = mode
            .settings()
            .source_maps
            .then(|| "source-map".to_string());

        let plan = Self {
            mode,
            stats: "minimal".to_string(),
            context: PathBuf::from("src"),
            entry: "./index.tsx".to_string(),
            output,
            devtool,
            resolve: ResolveOptions::default(),
            rules,
            plugins,
            optimization,
            dev_server,
        };

        validation::validate_plan(&plan)?;
        debug!(
            rules = plan.rules.len(),
            stages = plan.plugins.len(),
            minimize = plan.optimization.minimize,
            "build plan resolved"
        );
        Ok(plan)
    }

    /// Serialize the plan for the bundler collaborator.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
