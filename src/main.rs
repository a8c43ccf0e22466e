use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use loan_wizard::audit::AuditLogger;
use loan_wizard::cli::{
    handle_audit_command, handle_steps_command, handle_submissions_command, OutputFormat,
};
use loan_wizard::config::paths::DATA_DIR_ENV;
use loan_wizard::config::{Settings, WizardPaths};
use loan_wizard::services::{MemorySubmitter, OutboxSubmitter, Submitter};
use loan_wizard::wizard::{PromptWizard, WizardSession};

#[derive(Parser)]
#[command(
    name = "loan-wizard",
    version,
    about = "Small business loan application wizard",
    long_about = "Walks an applicant through a nine-step loan questionnaire in the \
                  terminal, routes young businesses and low credit scores to \
                  alternative offers, and delivers completed applications to an outbox."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Keep submissions in memory instead of writing them to the outbox
    #[arg(long, global = true)]
    dry_run: bool,

    /// Directory for settings, audit log and outbox
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the full-screen wizard (default)
    #[command(alias = "ui")]
    Tui,

    /// Answer the questionnaire line by line on stdin
    Prompt,

    /// Show the question catalog
    Steps {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List delivered applications
    Submissions {
        /// Number of submissions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show recent wizard events from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => WizardPaths::with_base_dir(dir),
        None => WizardPaths::new()?,
    };

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let settings = load_settings(&paths)?;
            let session = new_session(&settings, &paths, cli.dry_run);
            if let Some(submission) = loan_wizard::tui::run_tui(&settings, session)? {
                println!("Application {} submitted.", submission.short_id());
            }
        }
        Commands::Prompt => {
            let settings = load_settings(&paths)?;
            let mut session = new_session(&settings, &paths, cli.dry_run);

            let stdin = io::stdin();
            let mut wizard = PromptWizard::new(stdin.lock(), io::stdout(), &settings.brand_name);
            let result = wizard.run(&mut session)?;

            if result.submission.is_some() && cli.dry_run {
                println!("(dry run: nothing was written to the outbox)");
            }
        }
        Commands::Steps { format } => {
            let mut out = io::stdout().lock();
            handle_steps_command(&mut out, format)?;
            out.flush()?;
        }
        Commands::Submissions { limit, format } => {
            let outbox = OutboxSubmitter::new(paths.outbox_file());
            let mut out = io::stdout().lock();
            handle_submissions_command(&mut out, &outbox, limit, format)?;
            out.flush()?;
        }
        Commands::Audit { limit } => {
            let logger = AuditLogger::new(paths.audit_log());
            let mut out = io::stdout().lock();
            handle_audit_command(&mut out, &logger, limit)?;
            out.flush()?;
        }
        Commands::Config => {
            let settings = load_settings(&paths)?;
            println!("Loan Wizard Configuration");
            println!("=========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Outbox:         {}", paths.outbox_file().display());
            println!();
            println!("Settings:");
            println!("  Brand name:             {}", settings.brand_name);
            println!(
                "  Minimum business age:   {} year(s)",
                settings.minimum_business_age_years
            );
            println!("  Invalid year policy:    {:?}", settings.invalid_year_policy);
            println!("  Audit enabled:          {}", settings.audit_enabled);
            println!("  Tick rate:              {} ms", settings.tick_rate_ms);
        }
    }

    Ok(())
}

/// Load settings, writing the defaults on first run so they can be edited
fn load_settings(paths: &WizardPaths) -> Result<Settings> {
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(paths)?;
    if !paths.settings_file().exists() {
        settings.save(paths)?;
    }
    Ok(settings)
}

/// Build a session with the outbox (or memory) submitter and audit log
fn new_session(
    settings: &Settings,
    paths: &WizardPaths,
    dry_run: bool,
) -> WizardSession<Box<dyn Submitter>> {
    let submitter: Box<dyn Submitter> = if dry_run {
        Box::new(MemorySubmitter::new())
    } else {
        Box::new(OutboxSubmitter::new(paths.outbox_file()))
    };

    let session = WizardSession::new(settings, submitter);
    if settings.audit_enabled {
        session.with_audit(AuditLogger::new(paths.audit_log()))
    } else {
        session
    }
}
