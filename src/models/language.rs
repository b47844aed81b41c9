use serde::{Deserialize, Serialize};

/// A language the platform ships content in.
///
/// Serialised as its ISO 639-1 code so it can key translation maps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
    Es,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Language; 3] = [Language::En, Language::Ja, Language::Es];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
            Language::Es => "es",
        }
    }

    /// English name, used in validation messages.
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ja => "Japanese",
            Language::Es => "Spanish",
        }
    }

    /// Name in the language itself, used on the toggle chips.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ja => "日本語",
            Language::Es => "Español",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
