//! Загрузка настроек сервера (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Переменная окружения с путём к файлу настроек
pub const CONFIG_ENV: &str = "MORSE_CONFIG";

/// Настройки HTTP-сервера
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Адрес для прослушивания
    #[serde(default = "default_host")]
    pub host: String,
    /// Порт
    #[serde(default = "default_port")]
    pub port: u16,
    /// Каталог, раздаваемый по `/static`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// HTML-страница для `/`
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_template_path() -> PathBuf {
    PathBuf::from("templates").join("template.html")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            template_path: default_template_path(),
        }
    }
}

impl ServerConfig {
    /// `host:port` для слушателя
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Путь к настройкам: `$MORSE_CONFIG` или `config.json` в рабочем каталоге
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.json"))
}

/// Разбор JSON настроек (при ошибке значения по умолчанию)
pub fn parse_config(content: &str) -> ServerConfig {
    serde_json::from_str(content).unwrap_or_else(|e| {
        log::warn!("Invalid config, using defaults: {}", e);
        ServerConfig::default()
    })
}

/// Загрузка файла настроек (нет файла или ошибка разбора - значения по умолчанию)
pub fn load_config() -> ServerConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => parse_config(&content),
        Err(_) => {
            log::info!("No config at {}, using defaults", path.display());
            ServerConfig::default()
        }
    }
}
