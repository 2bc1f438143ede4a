//! Terminal styles.
//!
//! Templates pick styles by name through the `style` filter. A name with no
//! registered style is flagged with `(!?)` so template typos show up in output.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const HEADER: &str = "header";
    pub const INDEX: &str = "index";
    pub const NAME: &str = "name";
    pub const QUANTITY: &str = "quantity";
    pub const MUTED: &str = "muted";
    pub const LABEL: &str = "label";
    pub const COMMAND: &str = "command";
    pub const QUESTION: &str = "question";
    pub const ALERT: &str = "alert";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

/// Named styles applied by the `style` template filter.
#[derive(Clone, Default)]
pub struct Styles {
    styles: HashMap<String, Style>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    /// Same name check as [`Styles::apply`], without ANSI codes.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }

    pub fn render(&self, name: &str, text: &str, use_color: bool) -> String {
        if use_color {
            self.apply(name, text)
        } else {
            self.apply_plain(name, text)
        }
    }
}

pub static STOCKZ_STYLES: Lazy<Styles> = Lazy::new(|| {
    Styles::new()
        .add(names::HEADER, Style::new().bold().underlined())
        .add(names::INDEX, Style::new().yellow())
        .add(names::NAME, Style::new())
        .add(names::QUANTITY, Style::new().cyan())
        .add(names::MUTED, Style::new().color256(246).italic())
        .add(names::LABEL, Style::new().bold())
        .add(names::COMMAND, Style::new().green())
        .add(names::QUESTION, Style::new().magenta().bold())
        .add(names::ALERT, Style::new().red().bold())
        .add(names::INFO, Style::new())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keeps_text() {
        assert_eq!(STOCKZ_STYLES.apply_plain(names::NAME, "Arroz"), "Arroz");
    }

    #[test]
    fn test_unknown_style_is_flagged() {
        assert_eq!(STOCKZ_STYLES.apply_plain("nme", "Arroz"), "(!?) Arroz");
        assert_eq!(STOCKZ_STYLES.render("nme", "Arroz", true), "(!?) Arroz");
    }

    #[test]
    fn test_color_wraps_text() {
        let styles = Styles::new().add("hot", Style::new().red().force_styling(true));
        let out = styles.apply("hot", "fire");
        assert!(out.contains("fire"));
        assert_ne!(out, "fire");
    }
}
