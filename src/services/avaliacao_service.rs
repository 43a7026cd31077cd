use crate::config;
use crate::models::Avaliacao;
use crate::session::Sessao;
use crate::utils::AppError;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NovaAvaliacao<'a> {
    usuario_id: i64,
    filme_id: i64,
    nota: f64,
    comentario: Option<&'a str>,
}

/// Cria uma avaliação (nota + comentário) para um filme. Exige usuário logado.
pub async fn criar_avaliacao(
    sessao: &Sessao,
    filme_id: i64,
    nota: f64,
    comentario: Option<&str>,
) -> Result<Avaliacao, AppError> {
    let usuario_id = sessao.usuario_id().ok_or(AppError::NotAuthenticated)?;
    let url = format!("{}/avaliacoes", config::api_url());

    let body = NovaAvaliacao {
        usuario_id,
        filme_id,
        nota,
        comentario,
    };

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(|e| AppError::ApiError(format!("Failed to create avaliacao: {}", e)))?;

    if !response.status().is_success() {
        return Err(AppError::ApiError(format!(
            "Avaliacoes API error: {}",
            response.status()
        )));
    }

    let criada: Avaliacao = response
        .json()
        .await
        .map_err(|e| AppError::ApiError(format!("Failed to parse avaliacao: {}", e)))?;

    log::info!("⭐ Avaliação criada: filme {} nota {}", filme_id, nota);
    Ok(criada)
}

/// Lista as avaliações de um filme.
///
/// Caminho legado: qualquer falha de transporte é logada e vira lista vazia,
/// em vez de propagar.
pub async fn listar_por_filme(filme_id: i64) -> Vec<Avaliacao> {
    let url = format!("{}/avaliacoes/filme/{}", config::api_url(), filme_id);

    let client = reqwest::Client::new();
    let resultado = async {
        let response = client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;
        response.error_for_status()?.json::<Vec<Avaliacao>>().await
    }
    .await;

    match resultado {
        Ok(avaliacoes) => avaliacoes,
        Err(e) => {
            log::error!("❌ Erro ao buscar avaliações: {}", e);
            Vec::new()
        }
    }
}
