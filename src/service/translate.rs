//! Выбор режима для запросов перевода

use std::str::FromStr;

use crate::core::language::Language;
use crate::core::{decode_with_hint, morse_to_text_with_language, text_to_morse};
use crate::detection::{detect_language, is_valid_morse};

use super::error::TranslateError;
use super::types::{TranslationRequest, TranslationResponse};

/// Направление перевода из запроса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    TextToMorse,
    MorseToText,
    /// Декодировать, если вход похож на Морзе, иначе кодировать
    Auto,
}

impl FromStr for Mode {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text-to-morse" => Ok(Mode::TextToMorse),
            "morse-to-text" => Ok(Mode::MorseToText),
            "auto" => Ok(Mode::Auto),
            other => Err(TranslateError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Успешный перевод
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub result: String,
    /// Определённый язык при кодировании, основной язык при декодировании
    pub language: Language,
}

fn encode(text: &str) -> Translation {
    Translation {
        language: detect_language(text),
        result: text_to_morse(text),
    }
}

/// Выполнить один запрос перевода
pub fn translate(request: &TranslationRequest) -> Result<Translation, TranslateError> {
    if request.text.trim().is_empty() {
        return Err(TranslateError::EmptyText);
    }

    let mode: Mode = request.mode.parse()?;
    let text = request.text.as_str();

    let translation = match mode {
        Mode::TextToMorse => encode(text),
        Mode::MorseToText => Translation {
            result: decode_with_hint(text, &request.language),
            language: Language::from_hint(&request.language),
        },
        Mode::Auto if is_valid_morse(text) => Translation {
            result: morse_to_text_with_language(text, Language::Russian),
            language: Language::Russian,
        },
        Mode::Auto => encode(text),
    };

    Ok(translation)
}

/// Разобрать JSON-тело, перевести и собрать ответ
pub fn translate_json(body: &[u8]) -> TranslationResponse {
    let outcome = serde_json::from_slice::<TranslationRequest>(body)
        .map_err(TranslateError::from)
        .and_then(|request| translate(&request));

    match outcome {
        Ok(translation) => TranslationResponse::ok(translation.result, Some(translation.language)),
        Err(e) => {
            log::warn!("Translation rejected: {:?}", e);
            TranslationResponse::failure(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, mode: &str, language: &str) -> TranslationRequest {
        TranslationRequest {
            text: text.to_string(),
            mode: mode.to_string(),
            language: language.to_string(),
        }
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("auto".parse::<Mode>(), Ok(Mode::Auto));
        assert_eq!("text-to-morse".parse::<Mode>(), Ok(Mode::TextToMorse));
        assert_eq!("morse-to-text".parse::<Mode>(), Ok(Mode::MorseToText));
        assert!("Auto".parse::<Mode>().is_err());
    }

    #[test]
    fn test_text_to_morse() {
        let t = translate(&request("SOS", "text-to-morse", "")).unwrap();
        assert_eq!(t.result, "... --- ...");
        assert_eq!(t.language, Language::English);
    }

    #[test]
    fn test_morse_to_text_with_hint() {
        let t = translate(&request("... --- ...", "morse-to-text", "english")).unwrap();
        assert_eq!(t.result, "SOS");
        assert_eq!(t.language, Language::English);

        let t = translate(&request("... --- ...", "morse-to-text", "")).unwrap();
        assert_eq!(t.result, "СОС");
        assert_eq!(t.language, Language::Russian);
    }

    #[test]
    fn test_auto_mode() {
        let t = translate(&request("... --- ...", "auto", "english")).unwrap();
        // Авторежим игнорирует язык из запроса и начинает с русского
        assert_eq!(t.result, "СОС");

        let t = translate(&request("Привет", "auto", "")).unwrap();
        assert_eq!(t.result, ".--. .-. .. .-- . -");
        assert_eq!(t.language, Language::Russian);
    }

    #[test]
    fn test_morse_to_text_on_plain_text() {
        // Декодирование не падает, а заменяет букву на ?
        let t = translate(&request("abc", "morse-to-text", "english")).unwrap();
        assert_eq!(t.result, "?");
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            translate(&request("   ", "auto", "")),
            Err(TranslateError::EmptyText)
        );
        assert_eq!(
            translate(&request("SOS", "reverse", "")),
            Err(TranslateError::UnsupportedMode("reverse".to_string()))
        );
    }

    #[test]
    fn test_translate_json() {
        let resp = translate_json(br#"{"text":"SOS","mode":"text-to-morse"}"#);
        assert!(resp.success);
        assert_eq!(resp.result, "... --- ...");
        assert_eq!(resp.language, Some(Language::English));

        let resp = translate_json(b"not json");
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("Ошибка чтения запроса"));
    }
}
