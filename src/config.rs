use std::env;
use std::path::PathBuf;

/// URL base do backend (inclui o prefixo /api).
pub fn api_url() -> String {
    env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080/api".to_string())
}

pub fn tmdb_base_url() -> String {
    env::var("TMDB_BASE_URL").unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string())
}

pub fn tmdb_api_key() -> String {
    env::var("TMDB_API_KEY").unwrap_or_default()
}

pub fn tmdb_language() -> String {
    env::var("TMDB_LANGUAGE").unwrap_or_else(|_| "pt-BR".to_string())
}

/// Arquivo do storage local do cliente.
pub fn storage_path() -> PathBuf {
    env::var("CINECLUB_STORAGE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("cineclub-storage.json"))
}
