//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Library,
    Settings,
    Students,
    Editor,
    Dashboard,
}

impl Screen {
    /// Screens in function-key order (F1..F5).
    pub const ALL: [Screen; 5] = [
        Screen::Library,
        Screen::Settings,
        Screen::Students,
        Screen::Editor,
        Screen::Dashboard,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Screen::Library => "library",
            Screen::Settings => "settings",
            Screen::Students => "students",
            Screen::Editor => "editor",
            Screen::Dashboard => "dashboard",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Library => "F1 Content Library",
            Screen::Settings => "F2 Settings",
            Screen::Students => "F3 Students",
            Screen::Editor => "F4 Activity Editor",
            Screen::Dashboard => "F5 Student Dashboard",
        }
    }

    pub fn short_title(&self) -> &'static str {
        match self {
            Screen::Library => "Library",
            Screen::Settings => "Settings",
            Screen::Students => "Students",
            Screen::Editor => "Editor",
            Screen::Dashboard => "Student",
        }
    }

    /// Screen bound to function key `n` (1-based).
    pub fn from_function_key(n: u8) -> Option<Screen> {
        Self::ALL.get((n as usize).checked_sub(1)?).copied()
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_keys() {
        assert_eq!(Screen::from_function_key(1), Some(Screen::Library));
        assert_eq!(Screen::from_function_key(5), Some(Screen::Dashboard));
        assert_eq!(Screen::from_function_key(0), None);
        assert_eq!(Screen::from_function_key(6), None);
    }
}
