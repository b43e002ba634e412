//! Кодировщик: текст -> азбука Морзе

use crate::core::table::{table, UNKNOWN_CODE, WORD_SEPARATOR};

/// Верхний регистр для одного символа
///
/// Если символ раскрывается в несколько (`ß` -> `SS`), он остаётся как есть
/// и дальше кодируется заглушкой.
fn upper_single(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Перевод текста в азбуку Морзе, токены через пробел
///
/// Никогда не падает: перевод строки сохраняется как токен `\n`, прочие
/// пробельные символы дают `/`, символы вне таблицы дают `..--..`.
pub fn text_to_morse(text: &str) -> String {
    let table = table();
    let mut tokens: Vec<&str> = Vec::with_capacity(text.len());

    for c in text.chars().map(upper_single) {
        if let Some(code) = table.code_for(c) {
            tokens.push(code);
        } else if c == '\n' {
            tokens.push("\n");
        } else if c.is_whitespace() {
            tokens.push(WORD_SEPARATOR);
        } else {
            tokens.push(UNKNOWN_CODE);
        }
    }

    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sos() {
        assert_eq!(text_to_morse("SOS"), "... --- ...");
        assert_eq!(text_to_morse("sos"), "... --- ...");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(text_to_morse(""), "");
    }

    #[test]
    fn test_words_and_spaces() {
        assert_eq!(text_to_morse("HI YOU"), ".... .. / -.-- --- ..-");
        // Табуляция не в таблице, но это пробельный символ
        assert_eq!(text_to_morse("A\tB"), ".- / -...");
    }

    #[test]
    fn test_cyrillic() {
        assert_eq!(text_to_morse("Привет"), ".--. .-. .. .-- . -");
        assert_eq!(text_to_morse("ё"), ".");
    }

    #[test]
    fn test_newline_kept() {
        assert_eq!(text_to_morse("A\nB"), ".- \n -...");
    }

    #[test]
    fn test_unknown_character() {
        assert_eq!(text_to_morse("A😀B"), ".- ..--.. -...");
        assert_eq!(text_to_morse("#"), UNKNOWN_CODE);
    }

    #[test]
    fn test_multi_char_uppercase_is_one_placeholder() {
        // ß -> SS и ﬁ -> FI: один входной символ, одна заглушка
        assert_eq!(text_to_morse("ß"), UNKNOWN_CODE);
        assert_eq!(text_to_morse("ﬁ"), UNKNOWN_CODE);
        assert_eq!(text_to_morse("aßb"), ".- ..--.. -...");
    }

    #[test]
    fn test_digits_and_punctuation() {
        assert_eq!(text_to_morse("42!"), "....- ..--- -.-.--");
    }
}
