//! Stage-chain properties checked through fully emitted plans.

use rigging_plan::{stage_names, Mode, Overrides, ResolvedPlan};

#[test]
fn cycle_detector_leads_the_chain_in_both_modes() {
    for mode in [Mode::Development, Mode::Production] {
        let plan = ResolvedPlan::emit(mode, &Overrides::default()).unwrap();
        assert_eq!(
            plan.plugins.position(stage_names::CIRCULAR_DEPENDENCY),
            Some(0)
        );
    }
}

#[test]
fn cleaner_strictly_precedes_markup_stage_in_both_modes() {
    for mode in [Mode::Development, Mode::Production] {
        let plan = ResolvedPlan::emit(mode, &Overrides::default()).unwrap();
        let clean = plan.plugins.position(stage_names::CLEAN_OUTPUT).unwrap();
        let html = plan.plugins.position(stage_names::HTML_TEMPLATE).unwrap();
        assert!(clean < html);
    }
}

#[test]
fn extraction_stage_backs_the_stylesheet_rules() {
    let plan = ResolvedPlan::emit(Mode::Production, &Overrides::default()).unwrap();
    assert!(plan.plugins.provides_loader("extract"));

    let pos = plan.plugins.position(stage_names::CSS_EXTRACT).unwrap();
    let stage = &plan.plugins.stages()[pos];
    assert_eq!(stage.options["filename"], "css/[name].[contenthash].css");
    assert_eq!(
        stage.options["chunkFilename"],
        "css/[name].[contenthash].css"
    );
    assert_eq!(stage.options["ignoreOrder"], true);
}

#[test]
fn analyzer_is_present_by_default_and_removable() {
    let plan = ResolvedPlan::emit(Mode::Production, &Overrides::default()).unwrap();
    assert!(plan
        .plugins
        .position(stage_names::BUNDLE_ANALYZER)
        .is_some());

    let overrides = Overrides {
        analyze: false,
        ..Overrides::default()
    };
    let plan = ResolvedPlan::emit(Mode::Production, &overrides).unwrap();
    assert!(plan
        .plugins
        .position(stage_names::BUNDLE_ANALYZER)
        .is_none());
}

#[test]
fn locale_narrowing_is_fixed_and_mode_independent() {
    for mode in [Mode::Development, Mode::Production] {
        let plan = ResolvedPlan::emit(mode, &Overrides::default()).unwrap();
        let pos = plan.plugins.position(stage_names::LOCALE_NARROWING).unwrap();
        let stage = &plan.plugins.stages()[pos];
        assert_eq!(stage.options["module"], "moment/locale");
        assert_eq!(stage.options["locales"], serde_json::json!(["ru", "en"]));
    }
}
