//! Типы запроса и ответа перевода

use serde::{Deserialize, Serialize};

use crate::core::language::Language;

/// Тело `POST /translate`
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: String,
    /// `text-to-morse`, `morse-to-text` или `auto`
    #[serde(default)]
    pub mode: String,
    /// Язык декодирования: `english`, иначе русский
    #[serde(default)]
    pub language: String,
}

/// Ответ `POST /translate`
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TranslationResponse {
    pub success: bool,
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslationResponse {
    pub fn ok(result: String, language: Option<Language>) -> Self {
        Self {
            success: true,
            result,
            language,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: String::new(),
            language: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_missing_fields() {
        let req: TranslationRequest = serde_json::from_str(r#"{"text": "SOS"}"#).unwrap();
        assert_eq!(req.text, "SOS");
        assert_eq!(req.mode, "");
        assert_eq!(req.language, "");
    }

    #[test]
    fn test_success_omits_error() {
        let resp = TranslationResponse::ok("... --- ...".to_string(), Some(Language::English));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["result"], "... --- ...");
        assert_eq!(json["language"], "английский");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failure_omits_language() {
        let resp = TranslationResponse::failure("Неверный режим перевода");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["result"], "");
        assert_eq!(json["error"], "Неверный режим перевода");
        assert!(json.get("language").is_none());
    }
}
