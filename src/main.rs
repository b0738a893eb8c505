//! sqlexplain - explain SQL statements in plain English
//!
//! This is the main entry point for the sqlexplain command-line interface.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::BoolishValueParser;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use sqlexplain::explain::{ExplainConfig, RuleExplainer, UnsupportedPolicy};
use sqlexplain::shell::{
    explain_file, write_reports, OutputFormat, Repl, ReplConfig, Report, ShellResult,
};

/// Explain SQL SELECT and INSERT statements in plain English.
#[derive(Parser)]
#[command(name = "sqlexplain")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Explain a single statement and exit.
    #[arg(short, long, value_name = "SQL", conflicts_with = "file")]
    execute: Option<String>,

    /// Explain every `;`-separated statement in a file and exit.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Report column/alias and column/value count mismatches instead of
    /// pairing as far as possible. `SQLEXPLAIN_STRICT` accepts 1/0, yes/no,
    /// on/off and true/false.
    #[arg(long, env = "SQLEXPLAIN_STRICT", value_parser = BoolishValueParser::new())]
    strict: bool,

    /// Print a diagnostic for statements other than SELECT and INSERT.
    #[arg(long)]
    reject_unsupported: bool,

    /// Print one JSON object per statement.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ShellResult<()> {
    let unsupported = if cli.reject_unsupported {
        UnsupportedPolicy::Diagnostic
    } else {
        UnsupportedPolicy::PassThrough
    };
    let config = ExplainConfig::new().strict(cli.strict).unsupported(unsupported);
    debug!(?config, "explainer configured");
    let explainer = RuleExplainer::new(config);

    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };

    // Execute single statement, a script, or run the REPL.
    let reports = if let Some(sql) = cli.execute {
        vec![Report::explain(&explainer, &sql)]
    } else if let Some(path) = cli.file {
        explain_file(&path, &explainer)?
    } else {
        let config = ReplConfig {
            format,
            ..Default::default()
        };
        return Repl::with_config(Box::new(explainer), config).run();
    };

    let stdout = std::io::stdout();
    write_reports(&mut stdout.lock(), &reports, format)
}
