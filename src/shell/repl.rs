//! Interactive REPL (Read-Eval-Print Loop) for sqlexplain.

use std::io::{self, BufRead, Write};

use super::error::ShellResult;
use super::report::{write_reports, OutputFormat, Report};
use crate::explain::Explainer;
use crate::sql::normalize;

/// REPL configuration.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string.
    pub prompt: String,
    /// Output format for explanations.
    pub format: OutputFormat,
    /// Print the banner on start.
    pub banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "sqlexplain> ".into(),
            format: OutputFormat::Text,
            banner: true,
        }
    }
}

/// The interactive REPL.
pub struct Repl {
    explainer: Box<dyn Explainer>,
    config: ReplConfig,
    history: Vec<String>,
}

impl Repl {
    /// Create a new REPL around the given explainer.
    pub fn new(explainer: Box<dyn Explainer>) -> Self {
        Self::with_config(explainer, ReplConfig::default())
    }

    /// Create a REPL with custom configuration.
    pub fn with_config(explainer: Box<dyn Explainer>, config: ReplConfig) -> Self {
        Self {
            explainer,
            config,
            history: Vec::new(),
        }
    }

    /// Statements and commands entered so far.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Run the REPL on stdin/stdout.
    pub fn run(&mut self) -> ShellResult<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the REPL until EOF or `.quit`.
    pub fn run_with<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> ShellResult<()> {
        if self.config.banner {
            self.print_banner(&mut out)?;
        }

        let mut buffer = String::new();
        loop {
            let prompt = if buffer.is_empty() { self.config.prompt.as_str() } else { "     -> " };
            write!(out, "{}", prompt)?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // EOF.
                writeln!(out, "\nGoodbye!")?;
                break;
            }
            let line = line.trim_end();

            if buffer.is_empty() {
                let trimmed = line.trim_start();
                if trimmed.is_empty() {
                    continue;
                }
                if is_command(trimmed) {
                    self.history.push(trimmed.to_string());
                    if self.handle_command(trimmed, &mut out)? {
                        break;
                    }
                    continue;
                }
            } else {
                buffer.push(' ');
            }
            buffer.push_str(line);

            // Statements end with a semicolon and may span lines.
            if !buffer.ends_with(';') {
                continue;
            }

            let statement = normalize(&buffer).to_string();
            buffer.clear();
            if statement.is_empty() {
                continue;
            }
            self.history.push(statement.clone());

            let report = Report::explain(self.explainer.as_ref(), &statement);
            if report.explanation.is_empty() && self.config.format == OutputFormat::Text {
                writeln!(out, "(no explanation)")?;
            } else {
                write_reports(&mut out, &[report], self.config.format)?;
            }
        }

        Ok(())
    }

    fn print_banner<W: Write>(&self, out: &mut W) -> ShellResult<()> {
        writeln!(out, "sqlexplain v{}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "Enter SELECT or INSERT statements ending with ';', or .help for commands.")?;
        writeln!(out)?;
        Ok(())
    }

    fn handle_command<W: Write>(&mut self, cmd: &str, out: &mut W) -> ShellResult<bool> {
        let cmd = cmd.trim_start_matches(&['.', '\\'][..]);
        let command = cmd.split_whitespace().next().map(str::to_lowercase);

        match command.as_deref() {
            Some("help") | Some("h") | Some("?") => {
                self.print_help(out)?;
            }
            Some("quit") | Some("exit") | Some("q") => {
                return Ok(true);
            }
            Some("history") => {
                writeln!(out, "Command History:")?;
                for (i, entry) in self.history.iter().enumerate() {
                    writeln!(out, "  {}: {}", i + 1, entry)?;
                }
            }
            Some("json") => {
                self.config.format = match self.config.format {
                    OutputFormat::Text => OutputFormat::Json,
                    OutputFormat::Json => OutputFormat::Text,
                };
                let state = if self.config.format == OutputFormat::Json { "on" } else { "off" };
                writeln!(out, "JSON output: {}", state)?;
            }
            Some("clear") => {
                // Clear screen (ANSI escape).
                write!(out, "\x1B[2J\x1B[H")?;
            }
            Some(other) => {
                writeln!(out, "Unknown command: .{}", other)?;
                writeln!(out, "Type .help for available commands")?;
            }
            None => {}
        }

        Ok(false)
    }

    fn print_help<W: Write>(&self, out: &mut W) -> ShellResult<()> {
        writeln!(out, "Commands:")?;
        writeln!(out, "  .help, .h, .?           Show this help message")?;
        writeln!(out, "  .quit, .exit, .q        Exit the REPL")?;
        writeln!(out, "  .history                Show entered statements")?;
        writeln!(out, "  .json                   Toggle JSON output")?;
        writeln!(out, "  .clear                  Clear the screen")?;
        writeln!(out)?;
        writeln!(out, "Statements ({}):", self.explainer.name())?;
        writeln!(out, "  SELECT cols FROM table [WHERE ...] [GROUP BY ...] [ORDER BY ...];")?;
        writeln!(out, "  INSERT INTO table (cols) VALUES (vals);")?;
        writeln!(out)?;
        Ok(())
    }
}

fn is_command(input: &str) -> bool {
    input.starts_with('.') || input.starts_with('\\')
}
