//! Проверка синтаксиса Морзе
//!
//! Авторежим по ней выбирает между декодированием и кодированием.

/// Допустимые символы кода Морзе
fn is_morse_char(ch: char) -> bool {
    matches!(ch, '.' | '-' | ' ' | '/' | '\n')
}

/// Текст не пустой и состоит только из `.`, `-`, пробела, `/`, `\n`
pub fn is_valid_morse(text: &str) -> bool {
    // 1. Пустой ввод - не Морзе
    if text.trim().is_empty() {
        return false;
    }

    // 2. Каждый символ должен быть символом Морзе
    text.chars().all(is_morse_char)
}
