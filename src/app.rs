//! Application orchestrator.
//! Loads/merges config, initializes logging, installs signal handlers,
//! scans accounts, runs the interactive selection flow, and executes the
//! migration plan through the Safe Relocator.

use anyhow::Result;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

use sc2_bank_move::banks::map_title;
use sc2_bank_move::config::xml::{ensure_default_config_exists, load_config_from_xml, CONFIG_ENV};
use sc2_bank_move::config::{default_config_path, Config};
use sc2_bank_move::output as out;
use sc2_bank_move::{
    execute_plan, scan_accounts, shutdown, Account, BankMoveError, MigrationPlan, MigrationReport,
};

use sc2_bank_move::cli::Args;

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
            out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {}\n", cfg_env));
            out::print_info(&format!(
                "To override, unset {CONFIG_ENV} or set it to another file."
            ));
            return Ok(());
        }
        match default_config_path() {
            Some(p) => {
                out::print_info(&format!("Default sc2_bank_move config path:\n  {}\n", p.display()));
                if p.exists() {
                    out::print_info("A config file already exists at that location.");
                } else {
                    out::print_info("No config file exists there yet. Run without --print-config to create a template.");
                }
            }
            None => {
                out::print_error("Could not determine a default config path.");
            }
        }
        return Ok(());
    }

    // Create template config if none exists (before logging init)
    if let Some(path) = ensure_default_config_exists() {
        out::print_success(&format!(
            "A template sc2_bank_move config was written to: {}",
            path.display()
        ));
        out::print_info("Edit the file if your republish uses different publisher identifiers, then re-run this command.");
        return Ok(());
    }

    // Build config: XML values first, then CLI overrides (CLI wins).
    let mut cfg = load_config_from_xml().unwrap_or_default();
    args.apply_overrides(&mut cfg);

    // Initialize logging and capture the guard so we can drop it on signal
    let guard_opt: Option<tracing_appender::non_blocking::WorkerGuard> =
        init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
            out::print_error(&format!("Failed to initialize logging: {}", e));
            e
        })?;

    // Guard needs to be dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; finishing the current file then stopping...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take(); // drop guard here to flush tracing_appender
            }
        })
        .expect("failed to install signal handler");
    }

    debug!("Starting sc2_bank_move: {:?}", args);

    // Main run (so we can drop guard after)
    let result = run_inner(&args, &cfg);

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

fn run_inner(args: &Args, cfg: &Config) -> Result<()> {
    cfg.validate()?;

    out::print_info(&format!("Scanning accounts under {}", cfg.accounts_dir().display()));
    let accounts = scan_accounts(cfg)?;

    if accounts.is_empty() {
        out::print_user("No accounts with migratable saves were found.");
        out::print_user("Possible reasons:");
        out::print_user("  1. All saves have already been migrated");
        out::print_user(&format!(
            "  2. No account handle starts with '{}'",
            cfg.handle_prefix
        ));
        out::print_user(&format!(
            "  3. The old publisher folder '{}' holds none of the known bank files",
            cfg.old_publisher
        ));
        return Ok(());
    }

    display_accounts(&accounts);

    if args.list {
        return Ok(());
    }

    let Some(account) = select_account(&accounts, args.handle.as_deref()) else {
        out::print_user("No account selected; exiting.");
        return Ok(());
    };

    let plan = MigrationPlan::for_account(account);
    display_plan(account, &plan);

    if !cfg.assume_yes && !cfg.dry_run && !out::confirm("Start the migration?") {
        out::print_user("Migration cancelled.");
        return Ok(());
    }

    let report = execute_plan(cfg, &plan)?;
    display_report(cfg, &report);

    if report.all_succeeded() {
        info!(handle = %account.handle, "Account migration completed");
        Ok(())
    } else {
        for (file, err) in &report.failures {
            let code = err
                .downcast_ref::<BankMoveError>()
                .map(BankMoveError::code)
                .unwrap_or("relocate_error");
            error!(code, file, error = %format!("{err:#}"), "Relocation failed");
        }
        anyhow::bail!("{} file(s) failed to migrate", report.failures.len())
    }
}

fn display_accounts(accounts: &[Account]) {
    out::print_user(&format!(
        "Found {} account(s) with saves to migrate:\n",
        accounts.len()
    ));
    for (i, account) in accounts.iter().enumerate() {
        let mut line = format!("{}. Handle: {}", i + 1, account.handle);
        if let Some(name) = &account.display_name {
            line.push_str(&format!(" | Name: {}", name));
        }
        out::print_user(&line);
        out::print_user(&format!("   Battle.net id: {}", account.battle_net_id));
        out::print_user(&format!(
            "   Migratable saves: {}",
            account.migratable_files().len()
        ));
    }
    out::print_user("");
}

/// Pick an account: by handle when given, otherwise an interactive number
/// prompt (0 cancels).
fn select_account<'a>(accounts: &'a [Account], handle: Option<&str>) -> Option<&'a Account> {
    if let Some(h) = handle {
        let found = accounts.iter().find(|a| a.handle == h);
        if found.is_none() {
            out::print_error(&format!("No migratable account with handle '{}'", h));
        }
        return found;
    }

    loop {
        let answer = out::prompt_line(&format!(
            "Select an account to migrate, 1-{} (0 cancels):",
            accounts.len()
        ))?;
        match answer.parse::<usize>() {
            Ok(0) => return None,
            Ok(n) if n <= accounts.len() => return Some(&accounts[n - 1]),
            _ => out::print_warn(&format!(
                "Invalid choice; enter a number between 1 and {}",
                accounts.len()
            )),
        }
    }
}

fn display_plan(account: &Account, plan: &MigrationPlan) {
    out::print_user(&format!("\nMigrating account: {}", account.handle));
    if let Some(name) = &account.display_name {
        out::print_user(&format!("Name: {}", name));
    }
    out::print_user(&format!("  Source folder: {}", account.old_bank_dir.display()));
    out::print_user(&format!("  Target folder: {}", account.new_bank_dir.display()));
    out::print_user(&format!("\nSave files to migrate ({}):", plan.steps.len()));
    for step in &plan.steps {
        let marker = if step.needs_backup { "!" } else { "+" };
        out::print_user(&format!(
            "  {} {} ({})",
            marker,
            step.bank_file,
            map_title(step.bank_file)
        ));
    }
    if plan.backup_count() > 0 {
        out::print_warn(&format!(
            "{} existing file(s) at the target will be renamed to .bakN slots first",
            plan.backup_count()
        ));
    }
}

fn display_report(cfg: &Config, report: &MigrationReport) {
    if cfg.dry_run {
        out::print_info(&format!(
            "Dry-run: would migrate {} file(s)",
            report.migrated.len()
        ));
        return;
    }
    out::print_success(&format!("Migrated {} file(s)", report.migrated.len()));
    if !report.backups.is_empty() {
        out::print_info(&format!(
            "Created {} backup(s): {}",
            report.backups.len(),
            report
                .backups
                .iter()
                .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    for (file, err) in &report.failures {
        out::print_error(&format!("{}: {:#}", file, err));
    }
    if report.interrupted > 0 {
        out::print_warn(&format!(
            "{} file(s) were not attempted because the run was interrupted",
            report.interrupted
        ));
    }
}
