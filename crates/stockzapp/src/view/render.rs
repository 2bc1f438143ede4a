//! Row rendering.
//!
//! [`render_row`] turns an entry into a [`RowFragment`]; [`RowFragment::to_html`]
//! writes that fragment out as table markup following the row contract. Product
//! names are user input, so they are escaped wherever they land in markup.

use super::{ActionControl, ActionIntent, RowFragment};
use crate::model::StockKey;
use crate::validation::format_quantity;

pub fn render_row(key: &StockKey, display_name: &str, quantity: f64) -> RowFragment {
    RowFragment {
        key: key.clone(),
        name_cell: display_name.to_string(),
        quantity_cell: format_quantity(quantity),
        actions: vec![
            ActionControl {
                intent: ActionIntent::Edit,
                aria_label: format!("Edit {}", display_name),
            },
            ActionControl {
                intent: ActionIntent::Delete,
                aria_label: format!("Delete {}", display_name),
            },
        ],
    }
}

impl RowFragment {
    /// Table row markup for this fragment.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<tr data-key=\"{}\">\n    <td data-type=\"name\">{}</td>\n    <td data-type=\"quantity\">{}</td>\n    <td class=\"table__actions\">\n",
            escape_html(self.key.as_str()),
            escape_html(&self.name_cell),
            escape_html(&self.quantity_cell),
        );
        for action in &self.actions {
            let icon = match action.intent {
                ActionIntent::Edit => "fa-pen-to-square",
                ActionIntent::Delete => "fa-trash",
            };
            html.push_str(&format!(
                "        <button type=\"button\" class=\"btn-{intent}\" data-action=\"{intent}\" aria-label=\"{label}\">\n            <i class=\"fa-solid {icon}\"></i>\n        </button>\n",
                intent = action.intent,
                label = escape_html(&action.aria_label),
                icon = icon,
            ));
        }
        html.push_str("    </td>\n</tr>\n");
        html
    }
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
