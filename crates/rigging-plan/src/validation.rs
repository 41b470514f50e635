//! Pluggable plan validation strategies.
//!
//! The emitter runs [`StructureValidator`] before returning a plan, so the
//! ordering dependencies between the stage chain and the rule table are
//! explicit construction-time checks rather than array-position convention.
//! The trait is exported for downstream consumers that want to re-check a
//! plan they received.

use crate::error::{PlanError, Result};
use crate::plan::ResolvedPlan;
use crate::stages::{stage_names, STAGE_BACKED_LOADERS};

/// Trait for pluggable plan validation strategies.
pub trait PlanValidator {
    fn validate(&self, plan: &ResolvedPlan) -> Result<()>;
}

/// Structural validation: stage ordering and loader provision.
///
/// Rule disjointness is already enforced when the rule table is
/// constructed; this validator covers the cross-component invariants the
/// table cannot see on its own.
pub struct StructureValidator;

impl PlanValidator for StructureValidator {
    fn validate(&self, plan: &ResolvedPlan) -> Result<()> {
        // The cycle detector must run before anything else touches the
        // module graph.
        match plan.plugins.position(stage_names::CIRCULAR_DEPENDENCY) {
            Some(0) => {}
            _ => {
                return Err(PlanError::StageOrdering {
                    stage: stage_names::CIRCULAR_DEPENDENCY.to_string(),
                    constraint: "must be registered first in the chain".to_string(),
                })
            }
        }

        // No stale artifact may survive into the emitted markup.
        let clean = plan.plugins.position(stage_names::CLEAN_OUTPUT);
        let html = plan.plugins.position(stage_names::HTML_TEMPLATE);
        match (clean, html) {
            (Some(clean), Some(html)) if clean < html => {}
            _ => {
                return Err(PlanError::StageOrdering {
                    stage: stage_names::CLEAN_OUTPUT.to_string(),
                    constraint: "must be registered before the markup-template stage".to_string(),
                })
            }
        }

        // Every stage-backed loader a rule references must actually be
        // provided by a registered stage.
        for rule in plan.rules.iter() {
            for loader in rule.loaders() {
                if STAGE_BACKED_LOADERS.contains(&loader) && !plan.plugins.provides_loader(loader)
                {
                    return Err(PlanError::MissingStage {
                        loader: loader.to_string(),
                        rule: rule.pattern.extensions.join(", ."),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Convenience wrapper around [`StructureValidator`].
pub fn validate_plan(plan: &ResolvedPlan) -> Result<()> {
    StructureValidator.validate(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Overrides;
    use crate::mode::Mode;
    use crate::stages::{PluginChain, StageDescriptor};

    fn valid_plan() -> ResolvedPlan {
        ResolvedPlan::emit(Mode::Production, &Overrides::default()).unwrap()
    }

    #[test]
    fn emitted_plans_pass_validation() {
        assert!(validate_plan(&valid_plan()).is_ok());
    }

    #[test]
    fn misplaced_cycle_detector_is_rejected() {
        let mut plan = valid_plan();
        let mut stages: Vec<StageDescriptor> = plan.plugins.stages().to_vec();
        stages.swap(0, 1);
        plan.plugins = PluginChain::from_stages(stages);

        let err = validate_plan(&plan).unwrap_err();
        assert!(matches!(err, PlanError::StageOrdering { .. }));
    }

    #[test]
    fn missing_extraction_stage_is_rejected() {
        let mut plan = valid_plan();
        let stages: Vec<StageDescriptor> = plan
            .plugins
            .stages()
            .iter()
            .filter(|stage| stage.name != stage_names::CSS_EXTRACT)
            .cloned()
            .collect();
        plan.plugins = PluginChain::from_stages(stages);

        let err = validate_plan(&plan).unwrap_err();
        assert!(matches!(err, PlanError::MissingStage { ref loader, .. } if loader == "extract"));
    }

    #[test]
    fn cleaner_after_markup_stage_is_rejected() {
        let mut plan = valid_plan();
        let mut stages: Vec<StageDescriptor> = plan.plugins.stages().to_vec();
        let clean = stages
            .iter()
            .position(|s| s.name == stage_names::CLEAN_OUTPUT)
            .unwrap();
        let stage = stages.remove(clean);
        stages.push(stage);
        plan.plugins = PluginChain::from_stages(stages);

        let err = validate_plan(&plan).unwrap_err();
        assert!(matches!(err, PlanError::StageOrdering { .. }));
    }
}
