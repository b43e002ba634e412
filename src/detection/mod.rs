//! Определение языка и проверка синтаксиса Морзе

mod morse;
mod text;
pub mod validator;

pub use morse::detect_language_from_morse;
pub use text::detect_language;
pub use validator::is_valid_morse;
