//! Tabbed editor over the teacher settings record.
//!
//! All five tabs edit one in-memory draft through typed [`SettingsChange`]s.
//! Saving always sends the whole draft; there is no per-tab save.

use std::future::Future;

use crate::error::{describe, HanamiError, HanamiResult};
use crate::models::settings::{COLOR_SCHEMES, DISPLAY_LANGUAGES};
use crate::models::{
    CalendarChange, DisplayChange, EmailChange, Language, NotificationChange, PrivacyChange,
    SettingsChange, SettingsUpdate, TeacherSettings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Notifications,
    Email,
    Calendar,
    Display,
    Privacy,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 5] = [
        SettingsTab::Notifications,
        SettingsTab::Email,
        SettingsTab::Calendar,
        SettingsTab::Display,
        SettingsTab::Privacy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Email => "Email",
            SettingsTab::Calendar => "Calendar",
            SettingsTab::Display => "Display",
            SettingsTab::Privacy => "Privacy",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            SettingsTab::Notifications => "Notification Preferences",
            SettingsTab::Email => "Email Settings",
            SettingsTab::Calendar => "Calendar Settings",
            SettingsTab::Display => "Display Settings",
            SettingsTab::Privacy => "Privacy Settings",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Current value of one form field, as the screen shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Toggle(bool),
    /// One of a fixed set of options, shown by label.
    Choice(String),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsField {
    pub label: &'static str,
    pub value: FieldValue,
}

impl SettingsField {
    fn toggle(label: &'static str, on: bool) -> Self {
        Self {
            label,
            value: FieldValue::Toggle(on),
        }
    }

    fn choice(label: &'static str, shown: impl Into<String>) -> Self {
        Self {
            label,
            value: FieldValue::Choice(shown.into()),
        }
    }

    fn text(label: &'static str, text: &str) -> Self {
        Self {
            label,
            value: FieldValue::Text(text.to_string()),
        }
    }
}

fn color_scheme_label(scheme: &str) -> String {
    match scheme {
        "purple" => "Purple (Default)".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

fn display_language_label(code: &str) -> String {
    Language::from_code(code)
        .map(|l| l.name().to_string())
        .unwrap_or_else(|| code.to_string())
}

fn cycle(options: &[&str], current: &str) -> String {
    let pos = options.iter().position(|o| *o == current);
    let next = pos.map_or(0, |p| (p + 1) % options.len());
    options[next].to_string()
}

#[derive(Debug, Clone)]
pub struct SettingsEditor {
    seed: TeacherSettings,
    draft: TeacherSettings,
    tab: SettingsTab,
    selected: usize,
    is_saving: bool,
    error: Option<String>,
    saved: bool,
}

impl SettingsEditor {
    pub fn new(settings: TeacherSettings) -> Self {
        Self {
            seed: settings.clone(),
            draft: settings,
            tab: SettingsTab::default(),
            selected: 0,
            is_saving: false,
            error: None,
            saved: false,
        }
    }

    pub fn draft(&self) -> &TeacherSettings {
        &self.draft
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.seed
    }

    pub fn tab(&self) -> SettingsTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: SettingsTab) {
        self.tab = tab;
        self.selected = 0;
    }

    pub fn next_tab(&mut self) {
        self.set_tab(self.tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.set_tab(self.tab.prev());
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Set after a successful save, cleared by the next edit.
    pub fn saved(&self) -> bool {
        self.saved
    }

    /// Apply one field edit to the draft.
    pub fn apply(&mut self, change: SettingsChange) {
        self.draft.apply(change);
        self.saved = false;
    }

    /// Fields of the current tab, in display order.
    pub fn fields(&self) -> Vec<SettingsField> {
        self.fields_for(self.tab)
    }

    pub fn fields_for(&self, tab: SettingsTab) -> Vec<SettingsField> {
        let s = &self.draft;
        match tab {
            SettingsTab::Notifications => vec![
                SettingsField::toggle("Email notifications", s.notifications.email),
                SettingsField::toggle("In-app notifications", s.notifications.in_app),
                SettingsField::toggle(
                    "Parent communication updates",
                    s.notifications.parent_updates,
                ),
                SettingsField::toggle("Student progress alerts", s.notifications.student_progress),
            ],
            SettingsTab::Email => vec![
                SettingsField::text("Email Signature", &s.email.signature),
                SettingsField::text("Reply-To Email", &s.email.reply_to),
                SettingsField::toggle("Send copy to myself", s.email.copy_to_self),
            ],
            SettingsTab::Calendar => vec![
                SettingsField::choice("Default View", s.calendar.default_view.label()),
                SettingsField::choice("Week Starts On", s.calendar.week_starts_on.label()),
                SettingsField::text("Working Hours Start", &s.calendar.working_hours.start),
                SettingsField::text("Working Hours End", &s.calendar.working_hours.end),
            ],
            SettingsTab::Display => vec![
                SettingsField::choice("Theme", s.display.theme.label()),
                SettingsField::choice("Color Scheme", color_scheme_label(&s.display.color_scheme)),
                SettingsField::choice("Language", display_language_label(&s.display.language)),
            ],
            SettingsTab::Privacy => vec![
                SettingsField::toggle("Show email to parents", s.privacy.show_email),
                SettingsField::toggle("Show profile to other teachers", s.privacy.show_profile),
                SettingsField::toggle("Allow direct messages", s.privacy.allow_messages),
            ],
        }
    }

    /// Flip a toggle or advance a choice. Text fields are left alone.
    pub fn activate(&mut self, index: usize) -> bool {
        let s = &self.draft;
        let change = match (self.tab, index) {
            (SettingsTab::Notifications, 0) => {
                SettingsChange::Notifications(NotificationChange::Email(!s.notifications.email))
            }
            (SettingsTab::Notifications, 1) => {
                SettingsChange::Notifications(NotificationChange::InApp(!s.notifications.in_app))
            }
            (SettingsTab::Notifications, 2) => SettingsChange::Notifications(
                NotificationChange::ParentUpdates(!s.notifications.parent_updates),
            ),
            (SettingsTab::Notifications, 3) => SettingsChange::Notifications(
                NotificationChange::StudentProgress(!s.notifications.student_progress),
            ),
            (SettingsTab::Email, 2) => {
                SettingsChange::Email(EmailChange::CopyToSelf(!s.email.copy_to_self))
            }
            (SettingsTab::Calendar, 0) => SettingsChange::Calendar(CalendarChange::DefaultView(
                s.calendar.default_view.next(),
            )),
            (SettingsTab::Calendar, 1) => SettingsChange::Calendar(CalendarChange::WeekStartsOn(
                s.calendar.week_starts_on.next(),
            )),
            (SettingsTab::Display, 0) => {
                SettingsChange::Display(DisplayChange::Theme(s.display.theme.next()))
            }
            (SettingsTab::Display, 1) => SettingsChange::Display(DisplayChange::ColorScheme(
                cycle(&COLOR_SCHEMES, &s.display.color_scheme),
            )),
            (SettingsTab::Display, 2) => SettingsChange::Display(DisplayChange::Language(cycle(
                &DISPLAY_LANGUAGES,
                &s.display.language,
            ))),
            (SettingsTab::Privacy, 0) => {
                SettingsChange::Privacy(PrivacyChange::ShowEmail(!s.privacy.show_email))
            }
            (SettingsTab::Privacy, 1) => {
                SettingsChange::Privacy(PrivacyChange::ShowProfile(!s.privacy.show_profile))
            }
            (SettingsTab::Privacy, 2) => {
                SettingsChange::Privacy(PrivacyChange::AllowMessages(!s.privacy.allow_messages))
            }
            _ => return false,
        };
        self.apply(change);
        true
    }

    /// Replace the text of a text field.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        let text = text.into();
        let change = match (self.tab, index) {
            (SettingsTab::Email, 0) => SettingsChange::Email(EmailChange::Signature(text)),
            (SettingsTab::Email, 1) => SettingsChange::Email(EmailChange::ReplyTo(text)),
            (SettingsTab::Calendar, 2) => {
                SettingsChange::Calendar(CalendarChange::WorkingHoursStart(text))
            }
            (SettingsTab::Calendar, 3) => {
                SettingsChange::Calendar(CalendarChange::WorkingHoursEnd(text))
            }
            _ => return false,
        };
        self.apply(change);
        true
    }

    /// The full write body for the current draft.
    pub fn update(&self) -> SettingsUpdate {
        SettingsUpdate::from(self.draft.clone())
    }

    /// Send the whole draft through `save`.
    pub async fn submit<F, Fut>(&mut self, save: F) -> HanamiResult<()>
    where
        F: FnOnce(SettingsUpdate) -> Fut,
        Fut: Future<Output = HanamiResult<()>>,
    {
        self.is_saving = true;
        self.error = None;
        self.saved = false;
        let result = save(self.update()).await;
        self.is_saving = false;

        match result {
            Ok(()) => {
                self.seed = self.draft.clone();
                self.saved = true;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), "saving settings failed: {}", err);
                let message = describe(&err, "Failed to save settings");
                self.error = Some(message.clone());
                Err(HanamiError::message(message))
            }
        }
    }
}
