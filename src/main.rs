//! Переводчик азбуки Морзе - точка входа HTTP-сервера

use morse_translator::config::load_config;
use morse_translator::server::start_server;

#[tokio::main]
async fn main() {
    // Логирование (info и выше, если RUST_LOG не задан)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config();
    log::debug!("Config: {:?}", config);

    // Построить таблицу символов до первого запроса
    let symbols = morse_translator::core::table().len();
    log::info!("Morse table ready ({} symbols)", symbols);

    if let Err(e) = start_server(config).await {
        log::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}
