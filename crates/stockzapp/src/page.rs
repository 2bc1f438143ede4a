//! # Page
//!
//! [`Page`] is the event-driven shell around the API: it receives the events a
//! stock page produces, applies the timing rules, and hands the work to
//! [`StockzApi`].
//!
//! ## Events
//!
//! | Event | Needs | Effect |
//! |-------|-------|--------|
//! | [`PageEvent::Submit`] | form, both inputs, table body | validate, add or merge, reset the form |
//! | [`PageEvent::Click`] | table body | edit or delete the clicked row, subject to cooldown |
//! | [`PageEvent::SearchInput`] | search input | schedule a debounced filter pass |
//! | [`PageEvent::SearchEnter`] | search input | nothing; Enter never submits the form |
//! | [`PageEvent::LinkClick`] | link and section | toggle the stock section |
//!
//! Events whose elements are missing from the [`Markup`] are dropped.
//!
//! ## Time
//!
//! The page never sleeps. Deferred work is due at [`Page::next_deadline`] and runs
//! when the client calls [`Page::poll`]; all timestamps come from the injected
//! [`Clock`]. Dialogs block inside [`Page::dispatch`] for as long as the user takes.

use crate::api::StockzApi;
use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::StockzConfig;
use crate::cooldown::ActionCooldown;
use crate::debounce::Debouncer;
use crate::error::StockzError;
use crate::markup::{ElementId, Markup};
use crate::model::RowHandle;
use crate::prompt::Prompter;
use crate::view::{ActionIntent, StockView};
use std::time::Instant;

const SUBMIT_ELEMENTS: [ElementId; 4] = [
    ElementId::Form,
    ElementId::ProductInput,
    ElementId::QuantityInput,
    ElementId::StockTable,
];

const LINK_ELEMENTS: [ElementId; 2] = [ElementId::StockLink, ElementId::StockSection];

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Product form submitted with the raw field values.
    Submit { name: String, quantity: String },
    /// An action control on a row was clicked.
    Click { row: RowHandle, intent: ActionIntent },
    /// The search input changed to this value.
    SearchInput(String),
    /// Enter pressed inside the search input.
    SearchEnter,
    /// The navigation link to the stock section was clicked.
    LinkClick,
}

/// Values currently held by the product form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub product: String,
    pub quantity: String,
}

pub struct Page<V: StockView> {
    api: StockzApi<V>,
    markup: Markup,
    clock: Box<dyn Clock>,
    search: Debouncer<String>,
    cooldown: ActionCooldown<(RowHandle, ActionIntent)>,
    form: FormFields,
    section_active: bool,
    focus: Option<ElementId>,
}

impl<V: StockView> Page<V> {
    /// Mounts a page over `view`, checking `markup` against the contract.
    pub fn mount(view: V, config: &StockzConfig, markup: Markup, clock: Box<dyn Clock>) -> Self {
        markup.check();
        let focus = markup
            .has(ElementId::ProductInput)
            .then_some(ElementId::ProductInput);

        tracing::info!(
            min_quantity = config.min_quantity,
            debounce_ms = config.debounce_delay_ms,
            cooldown_ms = config.action_cooldown_ms,
            "stock page mounted"
        );

        Self {
            api: StockzApi::new(view, config.min_quantity),
            markup,
            clock,
            search: Debouncer::new(config.debounce_delay()),
            cooldown: ActionCooldown::new(config.action_cooldown()),
            form: FormFields::default(),
            section_active: config.open_stock_section,
            focus,
        }
    }

    pub fn api(&self) -> &StockzApi<V> {
        &self.api
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn section_active(&self) -> bool {
        self.section_active
    }

    pub fn focus(&self) -> Option<ElementId> {
        self.focus
    }

    pub fn is_search_pending(&self) -> bool {
        self.search.is_pending()
    }

    pub fn is_control_disabled(&self, row: RowHandle, intent: ActionIntent) -> bool {
        self.cooldown.is_disabled(&(row, intent), self.clock.now())
    }

    /// Handles one event. Dialogs it needs are shown through `prompter`.
    pub fn dispatch(&mut self, event: PageEvent, prompter: &mut dyn Prompter) -> CmdResult {
        match event {
            PageEvent::Submit { name, quantity } => self.on_submit(name, quantity, prompter),
            PageEvent::Click { row, intent } => self.on_click(row, intent, prompter),
            PageEvent::SearchInput(value) => self.on_search_input(value),
            PageEvent::SearchEnter => {
                tracing::trace!("enter in search input suppressed");
                CmdResult::default()
            }
            PageEvent::LinkClick => self.on_link_click(),
        }
    }

    /// Runs deferred work that has come due.
    ///
    /// Returns the result of the search pass, if one ran.
    pub fn poll(&mut self) -> Option<CmdResult> {
        let now = self.clock.now();
        self.cooldown.sweep(now);
        let term = self.search.take_due(now)?;
        Some(self.api.search(&term))
    }

    /// When [`Page::poll`] next has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.search.deadline(), self.cooldown.next_release()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Runs a pending search pass now instead of waiting for quiescence.
    pub fn flush_search(&mut self) -> Option<CmdResult> {
        let term = self.search.cancel()?;
        Some(self.api.search(&term))
    }

    /// Summary of the current stock.
    pub fn summary(&self) -> CmdResult {
        self.api.summary()
    }

    /// Resolves a typed selector to the row a click would target.
    pub fn row_for(&self, selector: &str) -> crate::error::Result<RowHandle> {
        self.api.resolve_row(selector)
    }

    fn on_submit(&mut self, name: String, quantity: String, prompter: &mut dyn Prompter) -> CmdResult {
        if !self.markup.has_all(&SUBMIT_ELEMENTS) {
            tracing::debug!("submit dropped: form elements missing");
            return CmdResult::default();
        }

        self.form = FormFields {
            product: name,
            quantity,
        };

        match self.api.submit(&self.form.product, &self.form.quantity, prompter) {
            Ok(result) => {
                self.form = FormFields::default();
                self.focus = Some(ElementId::ProductInput);
                result
            }
            // Already alerted; the form keeps its values for correction.
            Err(StockzError::Validation(_)) => CmdResult::default(),
            Err(e) => error_result(e),
        }
    }

    fn on_click(&mut self, row: RowHandle, intent: ActionIntent, prompter: &mut dyn Prompter) -> CmdResult {
        if !self.markup.has(ElementId::StockTable) {
            return CmdResult::default();
        }

        let key = match self.api.key_for_row(row) {
            Some(key) => key,
            None => {
                tracing::debug!(%row, "click on detached row ignored");
                return CmdResult::default();
            }
        };

        let now = self.clock.now();
        if !self.cooldown.try_activate(&(row, intent), now) {
            tracing::debug!(%row, %intent, "control disabled, click ignored");
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!(
                "{} on {} ignored: control is cooling down",
                intent, key
            )));
            return result;
        }

        let outcome = match intent {
            ActionIntent::Edit => self.api.edit_key(&key, prompter),
            ActionIntent::Delete => self.api.delete_key(&key, prompter),
        };
        outcome.unwrap_or_else(error_result)
    }

    fn on_search_input(&mut self, value: String) -> CmdResult {
        if !self.markup.has(ElementId::SearchInput) {
            return CmdResult::default();
        }
        self.search.schedule(value, self.clock.now());
        CmdResult::default()
    }

    fn on_link_click(&mut self) -> CmdResult {
        if !self.markup.has_all(&LINK_ELEMENTS) {
            return CmdResult::default();
        }

        self.section_active = !self.section_active;
        let mut result = CmdResult::default();
        if self.section_active {
            if self.markup.has(ElementId::SearchInput) {
                self.focus = Some(ElementId::SearchInput);
            }
            result.add_message(CmdMessage::info("Stock section opened"));
        } else {
            result.add_message(CmdMessage::info("Stock section closed"));
        }
        result
    }
}

fn error_result(error: StockzError) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(error.to_string()));
    result
}
