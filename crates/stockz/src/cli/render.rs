//! # Rendering
//!
//! Turns [`CmdResult`] values into terminal output, either text through the
//! minijinja templates in `templates/` or JSON.
//!
//! Layout math (column widths, padding) stays in Rust because it needs
//! Unicode-aware widths: "Feijão" is six columns wide but seven bytes long.
//! Templates receive ready-made strings and only choose styles.

use super::input::COMMANDS;
use super::setup::OutputMode;
use super::styles::{names, Styles, STOCKZ_STYLES};
use super::templates::{HELP_TEMPLATE, MESSAGES_TEMPLATE, SUMMARY_TEMPLATE, TABLE_TEMPLATE};
use minijinja::{Environment, Value};
use serde::Serialize;
use stockzapp::commands::{CmdMessage, CmdResult, DisplayEntry, MessageLevel};
use stockzapp::validation::format_quantity;
use unicode_width::UnicodeWidthStr;

const TABLE: &str = "table";
const MESSAGES: &str = "messages";
const SUMMARY: &str = "summary";
const HELP: &str = "help";

/// How a result should be presented in text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Messages,
    Table,
    Summary,
}

#[derive(Serialize)]
struct RowLine {
    index: String,
    name: String,
    padding: String,
    quantity: String,
}

#[derive(Serialize)]
struct TableData {
    empty: bool,
    empty_message: String,
    header: String,
    rows: Vec<RowLine>,
    footer: Option<String>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct SummaryData {
    count: usize,
    total: String,
}

#[derive(Serialize)]
struct HelpLine {
    usage: String,
    padding: String,
    about: String,
}

#[derive(Serialize)]
struct HelpData {
    commands: Vec<HelpLine>,
}

/// Output settings for a session plus the compiled templates.
pub struct Output {
    mode: OutputMode,
    use_color: bool,
    env: Environment<'static>,
}

impl Output {
    pub fn new(mode: OutputMode, use_color: bool) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        register_style_filter(&mut env, STOCKZ_STYLES.clone(), use_color);
        env.add_template(TABLE, TABLE_TEMPLATE)?;
        env.add_template(MESSAGES, MESSAGES_TEMPLATE)?;
        env.add_template(SUMMARY, SUMMARY_TEMPLATE)?;
        env.add_template(HELP, HELP_TEMPLATE)?;
        Ok(Self {
            mode,
            use_color,
            env,
        })
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Styles a single inline fragment, e.g. a dialog question.
    pub fn styled(&self, style: &str, text: &str) -> String {
        STOCKZ_STYLES.render(style, text, self.use_color)
    }

    /// Renders a command result. Empty results render as nothing.
    pub fn result(&self, result: &CmdResult, view: View) -> String {
        if self.mode == OutputMode::Json {
            return self.json(result);
        }

        let mut out = String::new();
        match view {
            View::Messages => {}
            View::Table => out.push_str(&self.table(&result.rows, result.visible)),
            View::Summary => {
                if let Some(summary) = &result.summary {
                    let data = SummaryData {
                        count: summary.count,
                        total: format_quantity(summary.total_quantity),
                    };
                    out.push_str(&self.render(SUMMARY, &data));
                }
            }
        }
        out.push_str(&self.messages(&result.messages));
        out
    }

    /// A single error, for problems found before reaching the page.
    pub fn error(&self, message: &str) -> String {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::error(message));
        self.result(&result, View::Messages)
    }

    pub fn help(&self) -> String {
        let width = COMMANDS.iter().map(|(usage, _)| usage.width()).max().unwrap_or(0);
        if self.mode == OutputMode::Json {
            let commands: Vec<_> = COMMANDS
                .iter()
                .map(|(usage, about)| serde_json::json!({ "usage": usage, "about": about }))
                .collect();
            return format!("{}\n", serde_json::Value::Array(commands));
        }

        let data = HelpData {
            commands: COMMANDS
                .iter()
                .map(|(usage, about)| HelpLine {
                    usage: usage.to_string(),
                    padding: " ".repeat(width - usage.width()),
                    about: about.to_string(),
                })
                .collect(),
        };
        self.render(HELP, &data)
    }

    /// Table body markup, as-is in text mode.
    pub fn html(&self, markup: &str) -> String {
        if self.mode == OutputMode::Json {
            return format!("{}\n", serde_json::json!({ "html": markup }));
        }
        markup.to_string()
    }

    fn json(&self, result: &CmdResult) -> String {
        if result.is_empty() {
            return String::new();
        }
        match serde_json::to_string(result) {
            Ok(json) => format!("{}\n", json),
            Err(e) => format!("{{\"error\":\"{}\"}}\n", e),
        }
    }

    fn table(&self, rows: &[DisplayEntry], visible: Option<usize>) -> String {
        let shown: Vec<&DisplayEntry> = rows.iter().filter(|r| r.index.is_some()).collect();
        let hidden = rows.len() - shown.len();

        let indexes: Vec<String> = shown
            .iter()
            .map(|r| r.index.map(|i| format!("{}.", i)).unwrap_or_default())
            .collect();
        let index_width = indexes.iter().map(|i| i.width()).max().unwrap_or(0).max(2);
        let name_width = shown
            .iter()
            .map(|r| r.name.width())
            .max()
            .unwrap_or(0)
            .max("Product".width());

        let lines = shown
            .iter()
            .zip(indexes)
            .map(|(row, index)| RowLine {
                padding: " ".repeat(name_width - row.name.width()),
                index: format!("{:>width$}", index, width = index_width),
                name: row.name.clone(),
                quantity: format_quantity(row.quantity),
            })
            .collect::<Vec<_>>();

        let empty_message = if visible.is_some() {
            "No products match the search."
        } else if hidden > 0 {
            "Every product is hidden by the search."
        } else {
            "No products in stock."
        };

        let footer = match visible {
            Some(n) => Some(format!("{} matching", n)),
            None if hidden > 0 => Some(format!("{} hidden by search", hidden)),
            None => None,
        };

        let data = TableData {
            empty: lines.is_empty(),
            empty_message: empty_message.to_string(),
            header: format!(
                "{:>iw$}  {:<nw$}  {}",
                "#",
                "Product",
                "Quantity",
                iw = index_width,
                nw = name_width
            ),
            rows: lines,
            footer,
        };
        self.render(TABLE, &data)
    }

    fn messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }

        let data = MessagesData {
            messages: messages
                .iter()
                .map(|m| MessageData {
                    content: m.content.clone(),
                    style: level_style(&m.level).to_string(),
                })
                .collect(),
        };
        match self.env.get_template(MESSAGES).and_then(|t| t.render(&data)) {
            Ok(out) => out,
            Err(_) => messages.iter().map(|m| format!("{}\n", m.content)).collect(),
        }
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.env
            .get_template(name)
            .and_then(|t| t.render(data))
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }
}

fn level_style(level: &MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

fn register_style_filter(env: &mut Environment<'static>, styles: Styles, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles.render(&name, &value.to_string(), use_color)
    });
}
