//! Определение языка по коду Морзе
//!
//! Учитываются только коды, которые есть ровно в одной обратной карте.
//! Общие коды (цифры, знаки и все коды латинских букв, у которых есть
//! кириллическая пара) ничего не говорят о языке.

use crate::core::language::Language;
use crate::core::table::{table, WORD_SEPARATOR};

/// Подсчёт кодов одного языка, ничья (в том числе 0/0) - русский
pub fn detect_language_from_morse(morse: &str) -> Language {
    let table = table();
    let mut russian = 0usize;
    let mut english = 0usize;

    let letters = morse
        .split(WORD_SEPARATOR)
        .flat_map(|word| word.trim().split(' '))
        .map(str::trim)
        .filter(|letter| !letter.is_empty());

    for letter in letters {
        match (table.russian(letter), table.english(letter)) {
            (Some(_), None) => russian += 1,
            (None, Some(_)) => english += 1,
            // общий или неизвестный код
            _ => {}
        }
    }

    if english > russian {
        Language::English
    } else {
        Language::Russian
    }
}
