//! Line-oriented terminal front-end.
//!
//! Thin integration layer between the docshelf library and a terminal. Each
//! line on stdin is one command; it is parsed into an `Event`, handed to
//! [`handle_event`], and the resulting frame and panels are printed.
//!
//! # Usage
//!
//! ```text
//! docshelf [seed=<file.json>] [theme=<name>] [theme_file=<file.toml>]
//!          [trace_level=<directive>] [view=list|grid|card] [width=<cols>]
//! docshelf config=<file.toml>
//! ```
//!
//! # Commands
//!
//! - `search <keyword>` / `/ <keyword>`: Set the keyword (empty clears it)
//! - `type <pdf|docx|xlsx|image|other>`: Toggle a type filter
//! - `size <small|medium|large>`: Apply a size preset
//! - `from <YYYY-MM-DD>` / `to <YYYY-MM-DD>`: Set a date bound (empty clears it)
//! - `clear`: Reset all structured filters
//! - `filters`: Show or hide the filter panel
//! - `drag <id> [over-id]`: Drop a document onto another
//! - `select <id>`: Toggle selection
//! - `move [group]`: Move the selection to a group (empty ungroups)
//! - `delete`: Delete the selection
//! - `view <list|grid|card>`: Switch layout
//! - `preview <id>`: Show the preview panel
//! - `stats`: Show usage statistics
//! - `quit`: Exit

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use docshelf::{handle_event, parse_command, Action, Config};

/// Front-end state wrapper.
struct Shell {
    /// Core application state from library layer.
    app: docshelf::AppState,

    /// Render width in columns.
    width: usize,
}

impl Shell {
    fn new(config: &Config) -> Self {
        Self {
            app: docshelf::initialize(config),
            width: config.width,
        }
    }

    /// Handles one input line. Returns `false` once the user asked to quit.
    fn update(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let span = tracing::debug_span!("shell_update", line = %line);
        let _guard = span.entered();

        let event = match parse_command(line) {
            Ok(event) => event,
            Err(e) => {
                tracing::debug!(error = %e, "rejected command");
                eprintln!("{e}");
                return Ok(true);
            }
        };

        match handle_event(&mut self.app, &event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                if should_render {
                    writeln!(out, "{}", docshelf::ui::render(&self.app, self.width))?;
                }
                for action in &actions {
                    if *action == Action::Quit {
                        return Ok(false);
                    }
                    if let Some(panel) = docshelf::ui::render_action(action, &self.app.theme, self.width) {
                        writeln!(out, "{panel}")?;
                    }
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                eprintln!("{e}");
            }
        }
        Ok(true)
    }
}

fn run(config: &Config) -> io::Result<()> {
    let mut shell = Shell::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", docshelf::ui::render(&shell.app, shell.width))?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if !shell.update(&line, &mut out)? {
            break;
        }
        out.flush()?;
    }

    tracing::debug!("shell exiting");
    Ok(())
}

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    docshelf::observability::init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::warn!(error = %e, "terminal I/O failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
