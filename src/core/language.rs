//! Языки для определения и декодирования

use serde::{Serialize, Serializer};
use std::fmt;

/// Определённый или запрошенный язык
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Russian,
    English,
    /// Только для текста: нет строгого большинства
    Undetermined,
}

impl Language {
    /// Название для пользователя
    pub fn label(&self) -> &'static str {
        match self {
            Language::Russian => "русский",
            Language::English => "английский",
            Language::Undetermined => "неопределен",
        }
    }

    /// Язык из запроса: `"english"` - английский,
    /// всё остальное (включая пустую строку) - русский
    pub fn from_hint(hint: &str) -> Self {
        if hint == "english" {
            Language::English
        } else {
            Language::Russian
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
