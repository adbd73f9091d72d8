//! Cleanup command.
//!
//! Provisioned keys and rules are left in place; cleanup only runs the
//! custom cleanup hook.

use std::path::Path;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::lifecycle::Phase;
use crate::error::Result;

/// Run the cleanup phase.
pub fn execute(settings: &Settings, home: &Path) -> Result<()> {
    let report = super::run_phase(Phase::Cleanup, settings, home)?;
    if report.hook_ran {
        output::success("cleanup finished");
    }
    Ok(())
}
