//! # CLI Layer
//!
//! Session setup and the event loop. This is the **only** place that:
//! - knows about stdin, stdout and stderr
//! - installs the log subscriber
//! - decides when timers are due in wall-clock time
//!
//! ## The Loop
//!
//! 1. Wait for an input line, but no longer than the page's next deadline.
//! 2. On a line: parse it, turn it into a page event (or a read-only query) and
//!    print the result. Dialogs read their answers from the same input.
//! 3. On a timeout: poll the page so a debounced search runs.
//! 4. At end of input: run any search still pending, then exit.

use super::input::{parse_line, Line, LineSource, Recv};
use super::prompter::TerminalPrompter;
use super::render::{Output, View};
use super::setup::{Cli, Commands, OutputMode};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, IsTerminal, Write};
use stockzapp::clock::SystemClock;
use stockzapp::config::StockzConfig;
use stockzapp::markup::Markup;
use stockzapp::page::{Page, PageEvent};
use stockzapp::view::{ActionIntent, TableView};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "STOCKZ_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let config = StockzConfig::load(&cwd).with_overrides(cli.min_quantity, cli.debounce_ms);

    if let Some(Commands::Config) = &cli.command {
        return print_config(&config);
    }

    let use_color = !cli.no_color && console::colors_enabled();
    let output = Output::new(cli.output, use_color).context("failed to load output templates")?;

    let interactive = cli.script.is_none() && std::io::stdin().is_terminal();
    let lines = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open script {}", path.display()))?;
            LineSource::spawn(BufReader::new(file))
        }
        None => LineSource::spawn(BufReader::new(std::io::stdin())),
    };

    let mut session = Session {
        page: Page::mount(
            TableView::new(),
            &config,
            Markup::complete(),
            Box::new(SystemClock),
        ),
        output,
        lines,
        assume_yes: cli.yes,
        interactive,
    };
    session.run();
    Ok(())
}

struct Session {
    page: Page<TableView>,
    output: Output,
    lines: LineSource,
    assume_yes: bool,
    interactive: bool,
}

impl Session {
    fn run(&mut self) {
        if self.interactive {
            println!("stockz: type `help` for commands, `quit` to leave.");
        }

        loop {
            self.show_prompt();
            match self.lines.recv_until(self.page.next_deadline()) {
                Recv::Line(line) => {
                    if !self.handle_line(&line) {
                        break;
                    }
                    self.poll();
                }
                Recv::Timeout => self.poll(),
                Recv::Closed => break,
            }
        }

        if let Some(result) = self.page.flush_search() {
            self.print(&self.output.result(&result, View::Table));
        }
    }

    /// Handles one line. Returns false when the session should end.
    fn handle_line(&mut self, raw: &str) -> bool {
        let line = match parse_line(raw) {
            Ok(line) => line,
            Err(message) => {
                self.print(&self.output.error(&message));
                return true;
            }
        };
        tracing::debug!(?line, "session line");

        match line {
            Line::Add { name, quantity } => {
                self.dispatch(PageEvent::Submit { name, quantity }, View::Messages)
            }
            Line::Edit(selector) => self.click(&selector, ActionIntent::Edit),
            Line::Delete(selector) => self.click(&selector, ActionIntent::Delete),
            Line::Search(term) => self.dispatch(PageEvent::SearchInput(term), View::Messages),
            Line::Stock => self.dispatch(PageEvent::LinkClick, View::Messages),
            Line::List => {
                if self.page.section_active() {
                    let result = self.page.api().list();
                    self.print(&self.output.result(&result, View::Table));
                } else {
                    self.print(
                        &self
                            .output
                            .error("The stock section is closed; type `stock` to open it."),
                    );
                }
            }
            Line::Summary => {
                let result = self.page.summary();
                self.print(&self.output.result(&result, View::Summary));
            }
            Line::Verify => {
                let result = self.page.api().verify();
                self.print(&self.output.result(&result, View::Messages));
            }
            Line::Html => {
                let markup = self.page.api().store().view().to_html();
                self.print(&self.output.html(&markup));
            }
            Line::Help => self.print(&self.output.help()),
            Line::Quit => return false,
            Line::Blank => {}
        }
        true
    }

    fn click(&mut self, selector: &str, intent: ActionIntent) {
        match self.page.row_for(selector) {
            Ok(row) => self.dispatch(PageEvent::Click { row, intent }, View::Messages),
            Err(e) => self.print(&self.output.error(&e.to_string())),
        }
    }

    fn dispatch(&mut self, event: PageEvent, view: View) {
        let result = {
            let mut prompter =
                TerminalPrompter::new(&self.lines, &self.output, self.assume_yes, !self.interactive);
            self.page.dispatch(event, &mut prompter)
        };
        self.print(&self.output.result(&result, view));
    }

    fn poll(&mut self) {
        if let Some(result) = self.page.poll() {
            self.print(&self.output.result(&result, View::Table));
        }
    }

    fn show_prompt(&self) {
        if self.interactive && self.output.mode() == OutputMode::Text {
            print!("> ");
            let _ = std::io::stdout().flush();
        }
    }

    fn print(&self, text: &str) {
        if !text.is_empty() {
            print!("{}", text);
            let _ = std::io::stdout().flush();
        }
    }
}

fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Prints every resolved configuration value as `key = value`.
fn print_config(config: &StockzConfig) -> Result<()> {
    let table = toml::Value::try_from(config).context("failed to serialize configuration")?;
    if let toml::Value::Table(t) = table {
        for (key, value) in &t {
            println!("{} = {}", key, value);
        }
    }
    Ok(())
}
