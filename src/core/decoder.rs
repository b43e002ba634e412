//! Декодер: азбука Морзе -> текст
//!
//! Вход разбирается по строкам (`\n`), словам (`/`) и буквам (пробел).
//! Каждая буква ищется сначала в обратной таблице основного языка, затем
//! в другой; если её нет ни в одной, получается `?`.

use crate::core::language::Language;
use crate::core::table::{table, SymbolTable, UNKNOWN_CHAR, WORD_SEPARATOR};
use crate::detection::detect_language_from_morse;

/// Декодирование с языком, определённым по самому коду
pub fn morse_to_text(morse: &str) -> String {
    let normalized = normalize(morse);
    if normalized.is_empty() {
        return String::new();
    }

    let language = detect_language_from_morse(&normalized);
    log::debug!("Morse language detected: {}", language);
    decode_lines(&normalized, language)
}

/// Декодирование с явно заданным основным языком
///
/// `Language::English` - сначала английская таблица, иначе русская.
pub fn morse_to_text_with_language(morse: &str, language: Language) -> String {
    let normalized = normalize(morse);
    if normalized.is_empty() {
        return String::new();
    }

    decode_lines(&normalized, language)
}

/// Декодирование по строке языка из запроса (`"english"` или любая другая)
pub fn decode_with_hint(morse: &str, hint: &str) -> String {
    morse_to_text_with_language(morse, Language::from_hint(hint))
}

fn normalize(morse: &str) -> String {
    morse.replace("  ", " ").trim().to_string()
}

fn decode_lines(morse: &str, language: Language) -> String {
    let table = table();

    morse
        .split('\n')
        .map(|line| decode_line(table, line, language))
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_line(table: &SymbolTable, line: &str, language: Language) -> String {
    line.trim()
        .split(WORD_SEPARATOR)
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(|word| {
            word.split(' ')
                .map(str::trim)
                .filter(|letter| !letter.is_empty())
                .map(|letter| decode_letter(table, letter, language))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_letter(table: &SymbolTable, code: &str, language: Language) -> char {
    let found = match language {
        Language::English => table.english(code).or_else(|| table.russian(code)),
        _ => table.russian(code).or_else(|| table.english(code)),
    };
    found.unwrap_or(UNKNOWN_CHAR)
}
