//! Prepare and cleanup phases.
//!
//! ```text
//! prepare:  validate -> [export script] -> (export-only? done)
//!           -> decode -> [custom prepare] -> provision + rewrite (per pair)
//!           -> override guard -> dump configs
//! cleanup:  (export-only? done) -> [custom cleanup]
//! ```
//!
//! The two phases share no state; cleanup only sees the same settings.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::config::Settings;
use crate::core::constants::FORGE_HOST;
use crate::core::domain::{AliasBinding, RewriteRule};
use crate::core::exec::Runner;
use crate::core::guard::{self, GuardOutcome};
use crate::core::provision::{self, SshLayout};
use crate::core::sink::Sink;
use crate::core::store::ConfigStore;
use crate::core::{dependency, rewrite, script};
use crate::error::Result;

/// Which half of the build this invocation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the build: provision keys and rewrite configuration.
    Prepare,
    /// After the build: run the cleanup hook.
    Cleanup,
}

/// External collaborators for one run.
pub struct Context<'a> {
    /// Home directory holding `.ssh`.
    pub home: &'a Path,
    pub runner: &'a dyn Runner,
    /// Store receiving the rewrite rules.
    pub global: &'a mut dyn ConfigStore,
    /// Store holding the `core.sshCommand` override.
    pub local: &'a mut dyn ConfigStore,
    pub sink: &'a mut dyn Sink,
}

/// What a run did.
#[derive(Debug, Default)]
pub struct Report {
    /// Path the companion script was written to.
    pub exported: Option<PathBuf>,
    /// Whether a custom hook command ran.
    pub hook_ran: bool,
    pub bindings: Vec<AliasBinding>,
    pub rules: Vec<RewriteRule>,
    /// `None` when the guard did not run (export-only, cleanup).
    pub guard: Option<GuardOutcome>,
}

/// Run one phase.
///
/// # Errors
///
/// Returns the first error encountered; side effects already applied are
/// left in place.
pub fn run(phase: Phase, settings: &Settings, ctx: &mut Context<'_>) -> Result<Report> {
    debug!(?phase, export_only = settings.export_only, "starting phase");
    match phase {
        Phase::Prepare => prepare(settings, ctx),
        Phase::Cleanup => cleanup(settings, ctx),
    }
}

fn prepare(settings: &Settings, ctx: &mut Context<'_>) -> Result<Report> {
    settings.validate()?;
    let mut report = Report::default();

    if let Some(path) = &settings.export_script {
        let rendered = script::render(
            settings.custom_prepare.as_deref(),
            settings.custom_cleanup.as_deref(),
        );
        script::export(path, &rendered)?;
        ctx.sink.info(&format!("Exported script to {}", path.display()));
        report.exported = Some(path.clone());

        if settings.export_only {
            return Ok(report);
        }
    }

    // A malformed list must fail before the hook or any provisioning runs.
    let pairs = dependency::decode(settings.dependencies.as_deref().unwrap_or_default())?;

    if let Some(command) = &settings.custom_prepare {
        run_hook(ctx, "Custom prepare", command)?;
        report.hook_ran = true;
    }

    ctx.sink.info(&format!("Found {} dependencies", pairs.len()));
    let layout = SshLayout::new(ctx.home);

    if !pairs.is_empty() {
        layout.ensure_dir()?;
        provision::scan_host(ctx.runner, &layout, FORGE_HOST)?;

        for (index, pair) in pairs.iter().enumerate() {
            ctx.sink.info(&format!("Adding {} dependency", pair.repository()));
            let binding = provision::provision(&layout, index, pair, FORGE_HOST)?;
            let rules = rewrite::register(&mut *ctx.global, &binding, pair)?;
            info!(
                alias = binding.alias(),
                repository = pair.repository(),
                rules = rules.len(),
                "dependency added"
            );
            report.rules.extend(rules);
            report.bindings.push(binding);
        }
    }

    let outcome = guard::neutralize(&mut *ctx.local)?;
    report_guard(&mut *ctx.sink, &outcome);
    report.guard = Some(outcome);

    dump(ctx, &layout);
    Ok(report)
}

fn cleanup(settings: &Settings, ctx: &mut Context<'_>) -> Result<Report> {
    let mut report = Report::default();
    if settings.export_only {
        debug!("export-only run, nothing to clean up");
        return Ok(report);
    }
    if let Some(command) = &settings.custom_cleanup {
        run_hook(ctx, "Custom cleanup", command)?;
        report.hook_ran = true;
    }
    Ok(report)
}

/// Run a user hook through the shell and show what it printed.
fn run_hook(ctx: &mut Context<'_>, title: &str, command: &str) -> Result<()> {
    debug!(command, "running hook");
    let output = ctx.runner.shell(command)?;
    ctx.sink.block(title, &output);
    Ok(())
}

fn report_guard(sink: &mut dyn Sink, outcome: &GuardOutcome) {
    match outcome {
        GuardOutcome::Stripped {
            replacement: Some(command),
            ..
        } => sink.info(&format!(
            "Removed identity file from core.sshCommand, now: {}",
            command
        )),
        GuardOutcome::Stripped {
            replacement: None, ..
        } => sink.info("Removed core.sshCommand, it only forced an identity file"),
        GuardOutcome::Unavailable | GuardOutcome::Absent | GuardOutcome::Kept(_) => {}
    }
}

/// Show the resulting configuration. Read failures are reported, not fatal.
fn dump(ctx: &mut Context<'_>, layout: &SshLayout) {
    let stores: [&dyn ConfigStore; 2] = [&*ctx.global, &*ctx.local];
    for store in stores {
        let title = format!("Git config ({})", store.scope());
        if !store.is_available() {
            ctx.sink.info(&format!("{} does not exist", title));
            continue;
        }
        match store.list() {
            Ok(listing) => ctx.sink.block(&title, &listing),
            Err(e) => {
                debug!(error = %e, "config dump failed");
                ctx.sink.info(&format!("{} does not exist", title));
            }
        }
    }

    match fs::read_to_string(layout.config_path()) {
        Ok(config) => ctx.sink.block("SSH config", &config),
        Err(e) => {
            debug!(error = %e, "ssh config dump failed");
            ctx.sink.info("SSH config does not exist");
        }
    }
}
