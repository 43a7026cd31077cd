use crate::config;
use crate::models::{LoginRequest, RegistroRequest, Usuario};
use crate::utils::AppError;

/// Cadastra um novo usuário no backend.
pub async fn registrar(dados: &RegistroRequest) -> Result<Usuario, AppError> {
    let url = format!("{}/usuarios", config::api_url());
    log::info!("📝 Registrando usuário: {}", dados.email);

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .json(dados)
        .send()
        .await
        .map_err(|e| AppError::ApiError(format!("Failed to register user: {}", e)))?;

    if !response.status().is_success() {
        return Err(AppError::ApiError(format!(
            "Usuarios API error: {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::ApiError(format!("Failed to parse user: {}", e)))
}

/// Autentica o usuário. O chamador guarda o resultado na `Sessao`.
pub async fn login(dados: &LoginRequest) -> Result<Usuario, AppError> {
    let url = format!("{}/usuarios/login", config::api_url());
    log::info!("🔑 Login: {}", dados.email);

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .json(dados)
        .send()
        .await
        .map_err(|e| AppError::ApiError(format!("Failed to login: {}", e)))?;

    if !response.status().is_success() {
        return Err(AppError::ApiError(format!(
            "Usuarios API error: {}",
            response.status()
        )));
    }

    let usuario: Usuario = response
        .json()
        .await
        .map_err(|e| AppError::ApiError(format!("Failed to parse user: {}", e)))?;

    log::info!("✅ Login efetuado: {} (id {})", usuario.nome, usuario.id);
    Ok(usuario)
}
