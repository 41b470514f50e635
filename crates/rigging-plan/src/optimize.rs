//! Output-shrinking policy, chosen solely by mode.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::mode::Mode;
use crate::rules::{loaders, TransformStep};

/// Whether and how output is shrunk in the final stage.
///
/// The minimizer chain is configured eagerly in both modes; only the
/// `minimize` flag gates execution, so flipping the policy later requires
/// no restructuring. Parallelism is a hint passed opaquely to the
/// downstream transform executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationPolicy {
    pub minimize: bool,
    pub minimizers: Vec<TransformStep>,
}

impl OptimizationPolicy {
    /// Select the policy for `mode`.
    pub fn select(mode: Mode) -> Self {
        let minimizers = match mode {
            Mode::Development => {
                vec![TransformStep::new(loaders::TERSER).with_option("parallel", true)]
            }
            Mode::Production => vec![TransformStep::new(loaders::TERSER)
                .with_option("parallel", true)
                .with_option("output", json!({ "comments": false }))
                .with_option("extractComments", false)],
        };

        Self {
            minimize: mode.settings().minimize,
            minimizers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimize_flag_follows_mode() {
        assert!(!OptimizationPolicy::select(Mode::Development).minimize);
        assert!(OptimizationPolicy::select(Mode::Production).minimize);
    }

    #[test]
    fn minimizer_chain_is_configured_in_both_modes() {
        for mode in [Mode::Development, Mode::Production] {
            let policy = OptimizationPolicy::select(mode);
            assert!(!policy.minimizers.is_empty());
            assert_eq!(policy.minimizers[0].name, loaders::TERSER);
            assert_eq!(
                policy.minimizers[0].option("parallel"),
                Some(&serde_json::Value::Bool(true))
            );
        }
    }

    #[test]
    fn production_chain_strips_comments_without_side_file() {
        let policy = OptimizationPolicy::select(Mode::Production);
        let terser = &policy.minimizers[0];
        assert_eq!(terser.option("output"), Some(&json!({ "comments": false })));
        assert_eq!(
            terser.option("extractComments"),
            Some(&serde_json::Value::Bool(false))
        );
    }
}
