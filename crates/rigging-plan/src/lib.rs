//! Rigging plan resolution core.
//!
//! Given a build mode (development or production) and a small set of
//! invocation overrides, this crate resolves one immutable [`ResolvedPlan`]
//! describing how a tree of heterogeneous assets is transformed into a
//! deployable output tree. The plan is the wire contract with the external
//! bundler; this crate never executes a build itself.
//!
//! Resolution is single-threaded, synchronous, and pure: every component
//! is a function of its explicit inputs and re-invoking with the same
//! inputs yields a deep-equal plan.

pub mod env;
pub mod error;
pub mod mode;
pub mod optimize;
pub mod output;
pub mod plan;
pub mod rules;
pub mod stages;
pub mod validation;

// Re-export main types
pub use env::{Environment, NetworkOverride, Overrides, DEV_SERVER_PORT, LAN_HOST};
pub use error::{PlanError, Result};
pub use mode::{Mode, ModeSettings};
pub use optimize::OptimizationPolicy;
pub use output::{OutputScheme, PRODUCTION_PUBLIC_ADDRESS};
pub use plan::{DevServerConfig, ResolveOptions, ResolvedPlan};
pub use rules::{loaders, MatchPattern, Rule, RuleTable, Scope, TransformStep};
pub use stages::{stage_names, PluginChain, StageDescriptor};

// Re-export validation entry points
pub use validation::{validate_plan, PlanValidator, StructureValidator};
