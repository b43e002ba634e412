//! Таблица символов Морзе: прямая карта и обратные карты по языкам

use std::collections::HashMap;
use std::sync::LazyLock;

/// Разделитель слов
pub const WORD_SEPARATOR: &str = "/";

/// Код для символов без соответствия (тот же, что у `?`)
pub const UNKNOWN_CODE: &str = "..--..";

/// Символ для кодов без соответствия
pub const UNKNOWN_CHAR: char = '?';

/// Исходные данные. Обратные карты заполняются в этом порядке, первый
/// символ для кода побеждает, поэтому `.` в русской карте - это `Е`.
const SYMBOLS: &[(char, &str)] = &[
    // Латиница
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."),
    ('F', "..-."), ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"),
    ('K', "-.-"), ('L', ".-.."), ('M', "--"), ('N', "-."), ('O', "---"),
    ('P', ".--."), ('Q', "--.-"), ('R', ".-."), ('S', "..."), ('T', "-"),
    ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"), ('Y', "-.--"),
    ('Z', "--.."),
    // Кириллица
    ('А', ".-"), ('Б', "-..."), ('В', ".--"), ('Г', "--."), ('Д', "-.."),
    ('Е', "."), ('Ё', "."), ('Ж', "...-"), ('З', "--.."), ('И', ".."),
    ('Й', ".---"), ('К', "-.-"), ('Л', ".-.."), ('М', "--"), ('Н', "-."),
    ('О', "---"), ('П', ".--."), ('Р', ".-."), ('С', "..."), ('Т', "-"),
    ('У', "..-"), ('Ф', "..-."), ('Х', "...."), ('Ц', "-.-."), ('Ч', "---."),
    ('Ш', "----"), ('Щ', "--.-"), ('Ъ', "--.--"), ('Ы', "-.--"), ('Ь', "-..-"),
    ('Э', "..-.."), ('Ю', "..--"), ('Я', ".-.-"),
    // Цифры
    ('0', "-----"), ('1', ".----"), ('2', "..---"), ('3', "...--"), ('4', "....-"),
    ('5', "....."), ('6', "-...."), ('7', "--..."), ('8', "---.."), ('9', "----."),
    // Знаки
    ('.', ".-.-.-"), (',', "--..--"), ('?', "..--.."), ('\'', ".----."), ('!', "-.-.--"),
    ('/', "-..-."), ('(', "-.--."), (')', "-.--.-"), ('&', ".-..."), (':', "---..."),
    (';', "-.-.-."), ('=', "-...-"), ('+', ".-.-."), ('-', "-....-"), ('_', "..--.-"),
    ('"', ".-..-."), ('$', "...-..-"), ('@', ".--.-."),
    (' ', WORD_SEPARATOR),
];

/// В какие обратные карты попадает символ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// А-Я и Ё: только русская карта
    Cyrillic,
    /// A-Z: только английская карта
    Latin,
    /// Цифры и знаки: обе карты
    Common,
}

/// Классификация символа таблицы (верхний регистр)
pub fn script_of(c: char) -> Script {
    match c {
        'А'..='Я' | 'Ё' => Script::Cyrillic,
        'A'..='Z' => Script::Latin,
        _ => Script::Common,
    }
}

/// Прямая и обратные таблицы Морзе
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    forward: HashMap<char, &'static str>,
    russian: HashMap<&'static str, char>,
    english: HashMap<&'static str, char>,
}

impl SymbolTable {
    /// Построить все три таблицы из исходных данных
    pub fn build() -> Self {
        let mut forward = HashMap::with_capacity(SYMBOLS.len());
        let mut russian = HashMap::new();
        let mut english = HashMap::new();

        for &(c, code) in SYMBOLS {
            forward.insert(c, code);
            match script_of(c) {
                Script::Cyrillic => {
                    russian.entry(code).or_insert(c);
                }
                Script::Latin => {
                    english.entry(code).or_insert(c);
                }
                Script::Common => {
                    russian.entry(code).or_insert(c);
                    english.entry(code).or_insert(c);
                }
            }
        }

        Self {
            forward,
            russian,
            english,
        }
    }

    /// Код Морзе для символа в верхнем регистре
    pub fn code_for(&self, c: char) -> Option<&'static str> {
        self.forward.get(&c).copied()
    }

    /// Символ по коду в русской карте
    pub fn russian(&self, code: &str) -> Option<char> {
        self.russian.get(code).copied()
    }

    /// Символ по коду в английской карте
    pub fn english(&self, code: &str) -> Option<char> {
        self.english.get(code).copied()
    }

    /// Число символов в прямой таблице
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

static TABLE: LazyLock<SymbolTable> = LazyLock::new(SymbolTable::build);

/// Общая таблица символов, строится при первом обращении
pub fn table() -> &'static SymbolTable {
    &TABLE
}
