//! Application orchestrator.
//! Builds the config from defaults and CLI flags, initializes logging, installs the
//! signal handler, then hands off to the selected utility.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

use mediadir::cli::{Args, Command, RenameArgs};
use mediadir::output as out;
use mediadir::publish::DryRunVcs;
use mediadir::{
    Config, GitCli, MediaDirError, RenameOptions, TerminalPrompt, build_manifest, publish_dir,
    run_session, shutdown,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);

    // Initialize logging and capture the guard so we can drop it on signal
    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json)
        .inspect_err(|e| out::print_error(&format!("Failed to initialize logging: {e}")))?;

    // Guard needs to be dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            let at_prompt = shutdown::is_awaiting_input();
            if at_prompt {
                out::print_user("");
                out::print_warn("Interrupted at prompt; nothing was changed.");
            } else {
                out::print_warn("Received interrupt; stopping after the current step...");
            }
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
            // A terminal read is restarted after the signal, so it would never return.
            if at_prompt {
                std::process::exit(130);
            }
        })
        .context("failed to install signal handler")?;
    }

    debug!("Starting mediadir: {:?}", args);

    let result = (|| -> Result<()> {
        if let Err(e) = cfg.validate() {
            error!(code = e.code(), kind = "invalid_config", error = %e, "Refusing to run");
            return Err(e.into());
        }
        let cwd = std::env::current_dir().context("Cannot determine the current directory")?;

        match &args.command {
            Command::Manifest(_) => {
                build_manifest(&cwd, &cfg)?;
            }
            Command::Publish(p) => {
                let report = if p.dry_run {
                    publish_dir(&cwd, &cfg, &mut DryRunVcs)?
                } else {
                    publish_dir(&cwd, &cfg, &mut GitCli::new(&cwd))?
                };
                debug!(
                    published = report.published(),
                    failed = report.failed(),
                    interrupted = report.interrupted,
                    "Publish finished"
                );
            }
            Command::Rename(r) => rename(r, &cfg)?,
        }
        Ok(())
    })();

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

/// Interactive rename. A missing or invalid target directory is reported, not raised.
fn rename(r: &RenameArgs, cfg: &Config) -> Result<()> {
    out::print_user("Batch rename: strip a prefix from file names");
    out::print_user(&"=".repeat(50));

    let opts = RenameOptions {
        prefix: r.prefix.clone(),
        assume_yes: r.yes,
        preview_only: r.preview_only,
    };
    let Err(e) = run_session(&r.dir, cfg, &mut TerminalPrompt, &opts) else {
        return Ok(());
    };
    if let Some(am) = e.downcast_ref::<MediaDirError>() {
        if matches!(
            am,
            MediaDirError::DirectoryNotFound(_) | MediaDirError::NotADirectory(_)
        ) {
            error!(code = am.code(), kind = "setup", dir = %canonical(&r.dir), "{am}");
            out::print_error(&am.to_string());
            return Ok(());
        }
        error!(code = am.code(), error = %am, "Rename failed");
    } else {
        error!(error = ?e, "Rename failed");
    }
    Err(e)
}

fn canonical(p: &Path) -> String {
    dunce::canonicalize(p)
        .unwrap_or_else(|_| p.to_path_buf())
        .display()
        .to_string()
}
