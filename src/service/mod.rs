//! Сервис перевода: проверка запроса и выбор режима
//!
//! Слой между HTTP-обработчиками и ядром кодека. Всё здесь синхронно
//! и без ввода-вывода.

mod error;
mod translate;
mod types;

pub use error::TranslateError;
pub use translate::{translate, translate_json, Mode, Translation};
pub use types::{TranslationRequest, TranslationResponse};
