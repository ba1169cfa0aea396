//! The ticket desk session: one store plus the state of the page around it.
//!
//! A `TicketDesk` is built once by whichever front end runs (a one-shot
//! command or the interactive shell) and handed to event handlers by
//! `&mut` reference. It owns the current priority filter, the search term,
//! the per-field error markers, and the transient alert, and it turns the
//! store into a [`DeskView`] after every event.

pub mod alert;
pub mod form;
pub mod view;

pub use alert::{Alert, AlertKind};
pub use form::{FieldMarkers, TicketForm};
pub use view::{DeskView, Stats, TicketCard};

use std::time::Duration;

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::config::Config;
use crate::error::{Result, TicketDeskError};
use crate::export::ExportReport;
use crate::storage::KeyValueStore;
use crate::store::TicketStore;
use crate::ticket::Ticket;
use crate::types::{Priority, PriorityFilter, TicketId};
use crate::utils::validation::{Field, ValidationErrors, validate_field, validate_submission};

/// Settings the desk reads from configuration.
#[derive(Debug, Clone)]
pub struct DeskSettings {
    pub default_priority: Priority,
    pub alert_duration: Duration,
    pub time_zone: TimeZone,
}

impl Default for DeskSettings {
    fn default() -> Self {
        Self {
            default_priority: Priority::default(),
            alert_duration: Duration::from_millis(3000),
            time_zone: TimeZone::system(),
        }
    }
}

impl DeskSettings {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            default_priority: config.default_priority,
            alert_duration: config.alert_duration(),
            time_zone: config.time_zone()?,
        })
    }
}

/// Result of a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Ticket),
    Rejected(ValidationErrors),
}

pub struct TicketDesk<S> {
    store: TicketStore<S>,
    settings: DeskSettings,
    filter: PriorityFilter,
    search: String,
    markers: FieldMarkers,
    alert: Option<Alert>,
}

impl<S: KeyValueStore> TicketDesk<S> {
    /// Load persisted tickets from `backend` and start a session.
    pub fn open(backend: S, settings: DeskSettings) -> Result<Self> {
        Ok(Self::new(TicketStore::open(backend)?, settings))
    }

    pub fn new(store: TicketStore<S>, settings: DeskSettings) -> Self {
        Self {
            store,
            settings,
            filter: PriorityFilter::All,
            search: String::new(),
            markers: FieldMarkers::default(),
            alert: None,
        }
    }

    pub fn store(&self) -> &TicketStore<S> {
        &self.store
    }

    pub fn settings(&self) -> &DeskSettings {
        &self.settings
    }

    /// A fresh form with the configured priority preselected.
    pub fn blank_form(&self) -> TicketForm {
        TicketForm::blank(self.settings.default_priority)
    }

    /// Check one field as the user leaves it, updating only that marker.
    pub fn validate_field(&mut self, field: Field, value: &str) -> bool {
        match validate_field(field, value) {
            Ok(()) => {
                self.markers.unmark(field);
                true
            }
            Err(e) => {
                self.markers.mark(field, e.message);
                false
            }
        }
    }

    pub fn submit(&mut self, form: TicketForm) -> Result<SubmitOutcome> {
        self.submit_at(form, Timestamp::now())
    }

    /// Validate the whole form and create the ticket if every field passes.
    ///
    /// A rejected form leaves the store untouched and marks every failing
    /// field; an accepted one clears all markers. Either way the alert is
    /// replaced.
    pub fn submit_at(&mut self, form: TicketForm, now: Timestamp) -> Result<SubmitOutcome> {
        if let Err(errors) = validate_submission(&form.name, &form.email, &form.message) {
            self.markers.replace_with(&errors);
            self.show_alert(AlertKind::Danger, alert::SUBMIT_REJECTED, now);
            tracing::debug!(failed = errors.len(), "rejected submission");
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let ticket = match self
            .store
            .create_at(&form.name, &form.email, &form.message, form.priority, now)
        {
            Ok(ticket) => ticket,
            Err(TicketDeskError::Validation(errors)) => {
                self.markers.replace_with(&errors);
                self.show_alert(AlertKind::Danger, alert::SUBMIT_REJECTED, now);
                return Ok(SubmitOutcome::Rejected(errors));
            }
            Err(e) => return Err(e),
        };

        self.markers.clear();
        self.show_alert(AlertKind::Success, alert::SUBMIT_SUCCESS, now);
        Ok(SubmitOutcome::Created(ticket))
    }

    pub fn delete(&mut self, id: TicketId) -> Result<bool> {
        self.store.delete(id)
    }

    pub fn toggle_read(&mut self, id: TicketId) -> Result<Option<bool>> {
        self.store.toggle_read(id)
    }

    pub fn clear(&mut self) -> Result<usize> {
        self.store.clear()
    }

    pub fn filter(&self) -> PriorityFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: PriorityFilter) {
        self.filter = filter;
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn markers(&self) -> &FieldMarkers {
        &self.markers
    }

    /// The alert, if it has not yet expired at `now`.
    pub fn visible_alert(&self, now: Timestamp) -> Option<&Alert> {
        self.alert.as_ref().filter(|a| a.is_visible_at(now))
    }

    fn show_alert(&mut self, kind: AlertKind, text: &str, now: Timestamp) {
        self.alert = Some(Alert::new(kind, text, now, self.settings.alert_duration));
    }

    /// Tickets under the current filter and search term.
    pub fn visible(&self) -> Vec<&Ticket> {
        self.store.query(self.filter, &self.search)
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total: self.store.count(),
            unread: self.store.count_unread(),
            high: self.store.count_high_priority(),
        }
    }

    pub fn view(&self) -> DeskView {
        self.view_at(Timestamp::now())
    }

    pub fn view_at(&self, now: Timestamp) -> DeskView {
        let stats = self.stats();
        DeskView {
            cards: self
                .visible()
                .into_iter()
                .map(|t| TicketCard::from_ticket(t, &self.settings.time_zone))
                .collect(),
            urgent_badge: stats.urgent_badge(),
            stats,
            alert: self.visible_alert(now).cloned(),
            field_errors: self
                .markers
                .iter()
                .map(|(f, m)| (f, m.to_string()))
                .collect(),
            filter: self.filter,
            search: self.search.clone(),
        }
    }

    pub fn export(&self) -> ExportReport {
        self.export_at(Timestamp::now())
    }

    pub fn export_at(&self, now: Timestamp) -> ExportReport {
        let report = ExportReport::build(self.store.list(), now);
        tracing::info!(
            total = report.total_tickets,
            high = report.high_priority,
            "exported tickets"
        );
        report
    }
}
