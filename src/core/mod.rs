//! Ядро кодека Морзе: таблица символов, кодировщик, декодер

pub mod decoder;
pub mod encoder;
pub mod language;
pub mod table;

pub use decoder::{decode_with_hint, morse_to_text, morse_to_text_with_language};
pub use encoder::text_to_morse;
pub use language::Language;
pub use table::{table, SymbolTable};
