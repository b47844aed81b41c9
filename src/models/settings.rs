//! Teacher settings record and the typed changes that edit it.
//!
//! The record is fixed-shape and always read and written whole. Edits go
//! through [`SettingsChange`], one variant family per section, applied by
//! [`TeacherSettings::apply`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email: bool,
    pub in_app: bool,
    pub parent_updates: bool,
    pub student_progress: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailSettings {
    pub signature: String,
    pub reply_to: String,
    pub copy_to_self: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Week,
    Month,
}

impl CalendarView {
    pub fn label(&self) -> &'static str {
        match self {
            CalendarView::Week => "Week",
            CalendarView::Month => "Month",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            CalendarView::Week => CalendarView::Month,
            CalendarView::Month => CalendarView::Week,
        }
    }
}

/// First day of the calendar week; serialised as the JS day number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum WeekStart {
    Sunday,
    Monday,
    Saturday,
}

impl WeekStart {
    pub fn label(&self) -> &'static str {
        match self {
            WeekStart::Sunday => "Sunday",
            WeekStart::Monday => "Monday",
            WeekStart::Saturday => "Saturday",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            WeekStart::Sunday => WeekStart::Monday,
            WeekStart::Monday => WeekStart::Saturday,
            WeekStart::Saturday => WeekStart::Sunday,
        }
    }
}

impl From<WeekStart> for u8 {
    fn from(day: WeekStart) -> u8 {
        match day {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
            WeekStart::Saturday => 6,
        }
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WeekStart::Sunday),
            1 => Ok(WeekStart::Monday),
            6 => Ok(WeekStart::Saturday),
            other => Err(format!("unsupported week start day: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkingHours {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSettings {
    pub default_view: CalendarView,
    pub week_starts_on: WeekStart,
    pub working_hours: WorkingHours,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }
}

/// Color schemes offered by the display tab.
pub const COLOR_SCHEMES: [&str; 4] = ["purple", "blue", "green", "pink"];

/// Interface languages offered by the display tab.
pub const DISPLAY_LANGUAGES: [&str; 3] = ["en", "ja", "es"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub theme: Theme,
    pub color_scheme: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub show_email: bool,
    pub show_profile: bool,
    pub allow_messages: bool,
}

/// The full teacher settings record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeacherSettings {
    pub notifications: NotificationSettings,
    pub email: EmailSettings,
    pub calendar: CalendarSettings,
    pub display: DisplaySettings,
    pub privacy: PrivacySettings,
}

impl Default for TeacherSettings {
    fn default() -> Self {
        Self {
            notifications: NotificationSettings {
                email: true,
                in_app: true,
                parent_updates: true,
                student_progress: true,
            },
            email: EmailSettings {
                signature: String::new(),
                reply_to: String::new(),
                copy_to_self: false,
            },
            calendar: CalendarSettings {
                default_view: CalendarView::Week,
                week_starts_on: WeekStart::Monday,
                working_hours: WorkingHours {
                    start: "09:00".to_string(),
                    end: "17:00".to_string(),
                },
            },
            display: DisplaySettings {
                theme: Theme::System,
                color_scheme: "purple".to_string(),
                language: "en".to_string(),
            },
            privacy: PrivacySettings {
                show_email: false,
                show_profile: true,
                allow_messages: true,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationChange {
    Email(bool),
    InApp(bool),
    ParentUpdates(bool),
    StudentProgress(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailChange {
    Signature(String),
    ReplyTo(String),
    CopyToSelf(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarChange {
    DefaultView(CalendarView),
    WeekStartsOn(WeekStart),
    WorkingHoursStart(String),
    WorkingHoursEnd(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayChange {
    Theme(Theme),
    ColorScheme(String),
    Language(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivacyChange {
    ShowEmail(bool),
    ShowProfile(bool),
    AllowMessages(bool),
}

/// A single field edit, addressed by section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsChange {
    Notifications(NotificationChange),
    Email(EmailChange),
    Calendar(CalendarChange),
    Display(DisplayChange),
    Privacy(PrivacyChange),
}

impl NotificationSettings {
    pub fn apply(&mut self, change: NotificationChange) {
        match change {
            NotificationChange::Email(v) => self.email = v,
            NotificationChange::InApp(v) => self.in_app = v,
            NotificationChange::ParentUpdates(v) => self.parent_updates = v,
            NotificationChange::StudentProgress(v) => self.student_progress = v,
        }
    }
}

impl EmailSettings {
    pub fn apply(&mut self, change: EmailChange) {
        match change {
            EmailChange::Signature(v) => self.signature = v,
            EmailChange::ReplyTo(v) => self.reply_to = v,
            EmailChange::CopyToSelf(v) => self.copy_to_self = v,
        }
    }
}

impl CalendarSettings {
    pub fn apply(&mut self, change: CalendarChange) {
        match change {
            CalendarChange::DefaultView(v) => self.default_view = v,
            CalendarChange::WeekStartsOn(v) => self.week_starts_on = v,
            CalendarChange::WorkingHoursStart(v) => self.working_hours.start = v,
            CalendarChange::WorkingHoursEnd(v) => self.working_hours.end = v,
        }
    }
}

impl DisplaySettings {
    pub fn apply(&mut self, change: DisplayChange) {
        match change {
            DisplayChange::Theme(v) => self.theme = v,
            DisplayChange::ColorScheme(v) => self.color_scheme = v,
            DisplayChange::Language(v) => self.language = v,
        }
    }
}

impl PrivacySettings {
    pub fn apply(&mut self, change: PrivacyChange) {
        match change {
            PrivacyChange::ShowEmail(v) => self.show_email = v,
            PrivacyChange::ShowProfile(v) => self.show_profile = v,
            PrivacyChange::AllowMessages(v) => self.allow_messages = v,
        }
    }
}

impl TeacherSettings {
    /// Apply one field edit. Only the addressed field changes.
    pub fn apply(&mut self, change: SettingsChange) {
        match change {
            SettingsChange::Notifications(c) => self.notifications.apply(c),
            SettingsChange::Email(c) => self.email.apply(c),
            SettingsChange::Calendar(c) => self.calendar.apply(c),
            SettingsChange::Display(c) => self.display.apply(c),
            SettingsChange::Privacy(c) => self.privacy.apply(c),
        }
    }

    /// Merge a partial update the way the server does: present sections
    /// replace the stored ones wholesale.
    pub fn merge(&mut self, update: SettingsUpdate) {
        if let Some(v) = update.notifications {
            self.notifications = v;
        }
        if let Some(v) = update.email {
            self.email = v;
        }
        if let Some(v) = update.calendar {
            self.calendar = v;
        }
        if let Some(v) = update.display {
            self.display = v;
        }
        if let Some(v) = update.privacy {
            self.privacy = v;
        }
    }
}

/// Body of `PUT /api/teacher/settings`: any subset of sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<NotificationSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar: Option<CalendarSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplaySettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<PrivacySettings>,
}

impl From<TeacherSettings> for SettingsUpdate {
    fn from(settings: TeacherSettings) -> Self {
        Self {
            notifications: Some(settings.notifications),
            email: Some(settings.email),
            calendar: Some(settings.calendar),
            display: Some(settings.display),
            privacy: Some(settings.privacy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = TeacherSettings::default();
        assert!(settings.notifications.email);
        assert!(!settings.email.copy_to_self);
        assert_eq!(settings.calendar.week_starts_on, WeekStart::Monday);
        assert_eq!(settings.calendar.working_hours.start, "09:00");
        assert_eq!(settings.display.theme, Theme::System);
        assert_eq!(settings.display.color_scheme, "purple");
        assert!(!settings.privacy.show_email);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(TeacherSettings::default()).unwrap();
        assert_eq!(json["notifications"]["inApp"], true);
        assert_eq!(json["email"]["replyTo"], "");
        assert_eq!(json["calendar"]["defaultView"], "week");
        assert_eq!(json["calendar"]["weekStartsOn"], 1);
        assert_eq!(json["calendar"]["workingHours"]["end"], "17:00");
        assert_eq!(json["display"]["colorScheme"], "purple");
        assert_eq!(json["privacy"]["allowMessages"], true);

        let back: TeacherSettings = serde_json::from_value(json).unwrap();
        assert_eq!(back, TeacherSettings::default());
    }

    #[test]
    fn test_week_start_rejects_unknown_day() {
        let result: Result<WeekStart, _> = serde_json::from_str("3");
        assert!(result.is_err());
        let saturday: WeekStart = serde_json::from_str("6").unwrap();
        assert_eq!(saturday, WeekStart::Saturday);
    }

    #[test]
    fn test_apply_touches_only_addressed_field() {
        let mut settings = TeacherSettings::default();
        settings.apply(SettingsChange::Notifications(NotificationChange::Email(false)));

        let mut expected = TeacherSettings::default();
        expected.notifications.email = false;
        assert_eq!(settings, expected);
    }

    #[test]
    fn test_merge_partial_update() {
        let mut stored = TeacherSettings::default();
        let mut display = stored.display.clone();
        display.theme = Theme::Dark;
        stored.merge(SettingsUpdate {
            display: Some(display),
            ..Default::default()
        });
        assert_eq!(stored.display.theme, Theme::Dark);
        assert_eq!(stored.notifications, TeacherSettings::default().notifications);
    }

    #[test]
    fn test_partial_update_serializes_only_present_sections() {
        let update = SettingsUpdate {
            privacy: Some(TeacherSettings::default().privacy),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert!(json.get("privacy").is_some());
    }

    #[test]
    fn test_cycles() {
        assert_eq!(Theme::System.next(), Theme::Light);
        assert_eq!(WeekStart::Saturday.next(), WeekStart::Sunday);
        assert_eq!(CalendarView::Month.next(), CalendarView::Week);
    }
}
