//! Per-session application state and the interactions that change it.
//!
//! A [`SessionState`] is an explicit value owned by whoever drives the
//! session. Each [`Interaction`] is applied to it in turn; a failed
//! interaction leaves it untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::calculate_form;
use crate::config::PayConfig;
use crate::content::LearnTopic;
use crate::error::{EngineError, EngineResult};
use crate::models::{IncomeRecord, PayForm, RecordSummary};

use super::store::RecordStore;

/// The page a session is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// The income form, results and sidebar.
    #[default]
    Home,
    /// The entitlements panel.
    Entitlements,
    /// The taxes panel.
    Taxes,
    /// The budgeting panel.
    Budget,
    /// A stored record's breakdown.
    View,
}

impl Section {
    /// The educational panel this section shows, if any.
    pub fn learn_topic(self) -> Option<LearnTopic> {
        match self {
            Section::Entitlements => Some(LearnTopic::Entitlements),
            Section::Taxes => Some(LearnTopic::Taxes),
            Section::Budget => Some(LearnTopic::Budget),
            Section::Home | Section::View => None,
        }
    }
}

/// Something the user does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "snake_case")]
pub enum Interaction {
    /// Switch to another section.
    Navigate(Section),
    /// Calculate a form and store the result.
    Store(PayForm),
    /// Load a stored record's form for editing.
    BeginEdit(usize),
    /// Recalculate and overwrite the record being edited.
    Update(PayForm),
    /// Stop editing without saving.
    CancelEdit,
    /// Show a stored record's breakdown.
    View(usize),
    /// Delete a stored record.
    Delete(usize),
}

/// What an interaction did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The section changed.
    Navigated {
        /// The new section.
        section: Section,
    },
    /// A record was appended.
    Stored {
        /// Its position.
        index: usize,
        /// The stored record.
        record: IncomeRecord,
    },
    /// A record's form was loaded for editing.
    Editing {
        /// Position of the record being edited.
        index: usize,
        /// The form to prefill.
        form: PayForm,
    },
    /// The edited record was overwritten.
    Updated {
        /// Its position.
        index: usize,
        /// The new record.
        record: IncomeRecord,
    },
    /// Editing stopped without changes.
    EditCancelled,
    /// A record is being shown.
    Viewing {
        /// Its position.
        index: usize,
        /// The record.
        record: IncomeRecord,
    },
    /// A record was removed.
    Deleted {
        /// Its former position.
        index: usize,
        /// The removed record.
        record: IncomeRecord,
    },
}

/// Everything one user's session remembers between interactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    section: Section,
    records: RecordStore,
    edit_index: Option<usize>,
    view_index: Option<usize>,
}

impl SessionState {
    /// A fresh session on the home section with no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// The section being shown.
    pub fn section(&self) -> Section {
        self.section
    }

    /// The stored records.
    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    /// Position of the record being edited, if any.
    pub fn edit_index(&self) -> Option<usize> {
        self.edit_index
    }

    /// Position of the record being viewed, if any.
    pub fn view_index(&self) -> Option<usize> {
        self.view_index
    }

    /// Applies one interaction.
    ///
    /// `today` stamps newly stored records with their ISO week.
    ///
    /// # Example
    ///
    /// ```
    /// use take_home_pay::config::PayConfig;
    /// use take_home_pay::models::{DayOfWeek, PayForm};
    /// use take_home_pay::session::{Interaction, SessionState};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let mut session = SessionState::new();
    /// let form = PayForm {
    ///     start_time: "09:00 AM".to_string(),
    ///     end_time: "05:00 PM".to_string(),
    ///     hourly_rate: Decimal::from(30),
    ///     days_worked: [DayOfWeek::Monday].into_iter().collect(),
    ///     ..Default::default()
    /// };
    /// let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    ///
    /// session.apply(Interaction::Store(form), &PayConfig::default(), today).unwrap();
    /// assert_eq!(session.records().len(), 1);
    /// ```
    pub fn apply(
        &mut self,
        interaction: Interaction,
        config: &PayConfig,
        today: NaiveDate,
    ) -> EngineResult<Outcome> {
        match interaction {
            Interaction::Navigate(section) => self.navigate(section),
            Interaction::Store(form) => {
                form.validate()?;
                let breakdown = calculate_form(&form, config);
                let record = IncomeRecord::new(form, breakdown, today);
                let index = self.records.push(record.clone());
                debug!(index, week = record.week, "Stored income record");
                Ok(Outcome::Stored { index, record })
            }
            Interaction::BeginEdit(index) => {
                let form = self.records.get(index)?.form.clone();
                self.edit_index = Some(index);
                self.section = Section::Home;
                Ok(Outcome::Editing { index, form })
            }
            Interaction::Update(form) => {
                let index = self.edit_index.ok_or(EngineError::NoRecordBeingEdited)?;
                form.validate()?;
                let breakdown = calculate_form(&form, config);
                let record = self.records.get(index)?.revise(form, breakdown);
                self.records.replace(index, record.clone())?;
                self.edit_index = None;
                debug!(index, "Updated income record");
                Ok(Outcome::Updated { index, record })
            }
            Interaction::CancelEdit => {
                self.edit_index = None;
                Ok(Outcome::EditCancelled)
            }
            Interaction::View(index) => {
                let record = self.records.get(index)?.clone();
                self.view_index = Some(index);
                self.section = Section::View;
                Ok(Outcome::Viewing { index, record })
            }
            Interaction::Delete(index) => {
                let record = self.records.remove(index)?;
                self.edit_index = shift_cursor(self.edit_index, index);
                self.view_index = shift_cursor(self.view_index, index);
                if self.section == Section::View && self.view_index.is_none() {
                    self.section = Section::Home;
                }
                debug!(index, remaining = self.records.len(), "Deleted income record");
                Ok(Outcome::Deleted { index, record })
            }
        }
    }

    fn navigate(&mut self, section: Section) -> EngineResult<Outcome> {
        match section {
            Section::View if self.view_index.is_none() => {
                return Err(EngineError::InvalidInput {
                    field: "section".to_string(),
                    message: "no record selected to view".to_string(),
                });
            }
            Section::View => {}
            _ => self.view_index = None,
        }
        self.section = section;
        Ok(Outcome::Navigated { section })
    }

    /// The record being viewed, if any.
    pub fn viewed_record(&self) -> Option<&IncomeRecord> {
        self.view_index.and_then(|i| self.records.get(i).ok())
    }

    /// A serializable summary of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            section: self.section,
            edit_index: self.edit_index,
            view_index: self.view_index,
            records: self.records.summaries(),
        }
    }
}

/// Moves a cursor to account for the removal of the record at `removed`.
fn shift_cursor(cursor: Option<usize>, removed: usize) -> Option<usize> {
    match cursor {
        Some(i) if i == removed => None,
        Some(i) if i > removed => Some(i - 1),
        other => other,
    }
}

/// What a client needs to draw the sidebar and pick the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The section being shown.
    pub section: Section,
    /// Position of the record being edited, if any.
    pub edit_index: Option<usize>,
    /// Position of the record being viewed, if any.
    pub view_index: Option<usize>,
    /// Sidebar entries.
    pub records: Vec<RecordSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, PayPeriod, PositionType};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn form(rate: &str) -> PayForm {
        PayForm {
            position: PositionType::PartTime,
            start_time: "09:00 AM".to_string(),
            end_time: "02:00 PM".to_string(),
            hourly_rate: dec(rate),
            days_worked: [
                DayOfWeek::Monday,
                DayOfWeek::Tuesday,
                DayOfWeek::Wednesday,
                DayOfWeek::Thursday,
                DayOfWeek::Friday,
            ]
            .into_iter()
            .collect(),
            period: PayPeriod::Weekly,
            ..PayForm::default()
        }
    }

    fn apply(session: &mut SessionState, interaction: Interaction) -> EngineResult<Outcome> {
        session.apply(interaction, &PayConfig::default(), today())
    }

    fn session_with(rates: &[&str]) -> SessionState {
        let mut session = SessionState::new();
        for rate in rates {
            apply(&mut session, Interaction::Store(form(rate))).unwrap();
        }
        session
    }

    #[test]
    fn test_store_appends_computed_record() {
        let mut session = SessionState::new();
        let outcome = apply(&mut session, Interaction::Store(form("20"))).unwrap();

        match outcome {
            Outcome::Stored { index, record } => {
                assert_eq!(index, 0);
                assert_eq!(record.week, 42);
                assert_eq!(record.breakdown.gross_income, dec("500"));
            }
            other => panic!("Expected Stored, got {:?}", other),
        }
        assert_eq!(session.records().len(), 1);
    }

    #[test]
    fn test_store_invalid_form_leaves_state_unchanged() {
        let mut session = session_with(&["20"]);
        let before = session.clone();

        let result = apply(&mut session, Interaction::Store(form("0")));
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
        assert_eq!(session, before);
    }

    #[test]
    fn test_edit_round_trip_reproduces_breakdown() {
        let mut session = session_with(&["20"]);
        let stored = session.records().get(0).unwrap().clone();

        let prefill = match apply(&mut session, Interaction::BeginEdit(0)).unwrap() {
            Outcome::Editing { form, .. } => form,
            other => panic!("Expected Editing, got {:?}", other),
        };
        assert_eq!(session.edit_index(), Some(0));

        apply(&mut session, Interaction::Update(prefill)).unwrap();
        assert_eq!(session.records().get(0).unwrap(), &stored);
        assert_eq!(session.edit_index(), None);
    }

    #[test]
    fn test_update_overwrites_and_keeps_week() {
        let mut session = SessionState::new();
        let earlier = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        session
            .apply(Interaction::Store(form("20")), &PayConfig::default(), earlier)
            .unwrap();

        apply(&mut session, Interaction::BeginEdit(0)).unwrap();
        let outcome = apply(&mut session, Interaction::Update(form("30"))).unwrap();

        let record = session.records().get(0).unwrap();
        assert_eq!(record.week, 2);
        assert_eq!(record.breakdown.gross_income, dec("750"));
        assert!(matches!(outcome, Outcome::Updated { index: 0, .. }));
    }

    #[test]
    fn test_update_without_edit_fails() {
        let mut session = session_with(&["20"]);
        assert!(matches!(
            apply(&mut session, Interaction::Update(form("30"))),
            Err(EngineError::NoRecordBeingEdited)
        ));
    }

    #[test]
    fn test_invalid_update_keeps_edit_cursor() {
        let mut session = session_with(&["20"]);
        apply(&mut session, Interaction::BeginEdit(0)).unwrap();

        assert!(apply(&mut session, Interaction::Update(form("-1"))).is_err());
        assert_eq!(session.edit_index(), Some(0));
    }

    #[test]
    fn test_cancel_edit() {
        let mut session = session_with(&["20"]);
        apply(&mut session, Interaction::BeginEdit(0)).unwrap();
        apply(&mut session, Interaction::CancelEdit).unwrap();
        assert_eq!(session.edit_index(), None);
    }

    #[test]
    fn test_begin_edit_unknown_record() {
        let mut session = session_with(&["20"]);
        assert!(matches!(
            apply(&mut session, Interaction::BeginEdit(3)),
            Err(EngineError::RecordNotFound { index: 3, len: 1 })
        ));
        assert_eq!(session.edit_index(), None);
    }

    #[test]
    fn test_view_switches_section() {
        let mut session = session_with(&["20", "25"]);
        apply(&mut session, Interaction::View(1)).unwrap();

        assert_eq!(session.section(), Section::View);
        assert_eq!(
            session.viewed_record().unwrap().breakdown.gross_income,
            dec("625")
        );

        apply(&mut session, Interaction::Navigate(Section::Home)).unwrap();
        assert_eq!(session.section(), Section::Home);
        assert_eq!(session.view_index(), None);
    }

    #[test]
    fn test_navigate_to_view_without_selection_fails() {
        let mut session = SessionState::new();
        assert!(apply(&mut session, Interaction::Navigate(Section::View)).is_err());
        assert_eq!(session.section(), Section::Home);
    }

    #[test]
    fn test_navigate_to_learn_panel() {
        let mut session = SessionState::new();
        apply(&mut session, Interaction::Navigate(Section::Taxes)).unwrap();
        assert_eq!(session.section().learn_topic(), Some(LearnTopic::Taxes));
    }

    #[test]
    fn test_delete_shifts_cursors() {
        let mut session = session_with(&["20", "25", "30"]);
        apply(&mut session, Interaction::BeginEdit(2)).unwrap();
        apply(&mut session, Interaction::View(1)).unwrap();

        apply(&mut session, Interaction::Delete(0)).unwrap();

        assert_eq!(session.records().len(), 2);
        assert_eq!(session.edit_index(), Some(1));
        assert_eq!(session.view_index(), Some(0));
        assert_eq!(
            session.viewed_record().unwrap().breakdown.gross_income,
            dec("625")
        );
    }

    #[test]
    fn test_delete_viewed_record_returns_home() {
        let mut session = session_with(&["20", "25"]);
        apply(&mut session, Interaction::View(0)).unwrap();
        apply(&mut session, Interaction::BeginEdit(0)).unwrap();
        apply(&mut session, Interaction::View(0)).unwrap();

        apply(&mut session, Interaction::Delete(0)).unwrap();

        assert_eq!(session.section(), Section::Home);
        assert_eq!(session.view_index(), None);
        assert_eq!(session.edit_index(), None);
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut session = session_with(&["20"]);
        assert!(apply(&mut session, Interaction::Delete(1)).is_err());
        assert_eq!(session.records().len(), 1);
    }

    #[test]
    fn test_snapshot_lists_summaries() {
        let session = session_with(&["20", "30"]);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.section, Section::Home);
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.records[1].gross_income.to_string(), "750.00");
    }

    #[test]
    fn test_interaction_deserialization() {
        let json = r#"{ "action": "delete", "payload": 2 }"#;
        let interaction: Interaction = serde_json::from_str(json).unwrap();
        assert_eq!(interaction, Interaction::Delete(2));

        let json = r#"{ "action": "cancel_edit" }"#;
        let interaction: Interaction = serde_json::from_str(json).unwrap();
        assert_eq!(interaction, Interaction::CancelEdit);
    }
}
