//! Command implementations.

use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

use rigging_plan::ResolvedPlan;

use crate::cli::ResolveArgs;

/// Resolve a plan and write it to the requested destination.
pub fn resolve_execute(args: ResolveArgs) -> Result<()> {
    let overrides = args.overrides();
    let plan = ResolvedPlan::emit(args.mode, &overrides)
        .into_diagnostic()
        .wrap_err("failed to resolve build plan")?;

    let json = if args.pretty {
        plan.to_json_pretty()
    } else {
        plan.to_json()
    }
    .into_diagnostic()?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to write plan to {}", path.display()))?;
            info!(path = %path.display(), mode = %args.mode, "build plan written");
        }
        None => {
            println!("{json}");
        }
    }

    Ok(())
}
