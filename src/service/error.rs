//! Ошибки перевода уровня запроса

/// Ошибки, которые пользователь видит как ответ `success: false`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Запрос к /translate не методом POST
    MethodNotAllowed,
    /// Тело не читается как JSON-запрос
    BadRequest(String),
    /// Текст пустой или из одних пробелов
    EmptyText,
    /// Неизвестный режим перевода
    UnsupportedMode(String),
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::MethodNotAllowed => write!(f, "Метод не поддерживается"),
            TranslateError::BadRequest(_) => write!(f, "Ошибка чтения запроса"),
            TranslateError::EmptyText => write!(f, "Введите текст для перевода"),
            TranslateError::UnsupportedMode(_) => write!(f, "Неверный режим перевода"),
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<serde_json::Error> for TranslateError {
    fn from(e: serde_json::Error) -> Self {
        TranslateError::BadRequest(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(TranslateError::EmptyText.to_string(), "Введите текст для перевода");
        assert_eq!(
            TranslateError::UnsupportedMode("x".into()).to_string(),
            "Неверный режим перевода"
        );
        assert_eq!(TranslateError::MethodNotAllowed.to_string(), "Метод не поддерживается");
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TranslateError = err.into();
        assert!(matches!(err, TranslateError::BadRequest(_)));
        assert_eq!(err.to_string(), "Ошибка чтения запроса");
    }
}
