//! Определение языка обычного текста

use crate::core::language::Language;

fn is_cyrillic_letter(ch: char) -> bool {
    matches!(ch, 'А'..='Я' | 'а'..='я' | 'Ё' | 'ё')
}

fn is_latin_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Подсчёт кириллических и латинских букв, побеждает строгое большинство
///
/// Цифры, знаки и буквы других алфавитов не учитываются. Ничья (в том
/// числе когда букв нет) - `Language::Undetermined`.
pub fn detect_language(text: &str) -> Language {
    let mut russian = 0usize;
    let mut english = 0usize;

    for ch in text.chars().filter(|c| c.is_alphabetic()) {
        if is_cyrillic_letter(ch) {
            russian += 1;
        } else if is_latin_letter(ch) {
            english += 1;
        }
    }

    if russian > english {
        Language::Russian
    } else if english > russian {
        Language::English
    } else {
        Language::Undetermined
    }
}
