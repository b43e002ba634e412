pub mod config;
pub mod core;
pub mod detection;
pub mod server;
pub mod service;

pub use crate::core::{
    decode_with_hint, morse_to_text, morse_to_text_with_language, text_to_morse, Language,
};
pub use crate::detection::{detect_language, detect_language_from_morse, is_valid_morse};
