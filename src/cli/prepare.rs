//! Prepare command.

use std::path::Path;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::lifecycle::Phase;
use crate::error::Result;

/// Run the prepare phase and print a summary.
pub fn execute(settings: &Settings, home: &Path) -> Result<()> {
    let report = super::run_phase(Phase::Prepare, settings, home)?;

    if report.guard.is_some() {
        output::success(&format!(
            "{} deploy keys provisioned, {} rewrite rules added",
            report.bindings.len(),
            report.rules.len()
        ));
    }
    Ok(())
}
