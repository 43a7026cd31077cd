use crate::config;
use crate::models::{Creditos, Filme, FilmeDetalhes, PaginaFilmes, Videos};
use crate::utils::AppError;
use serde::de::DeserializeOwned;

/// Catálogo de filmes (TMDB).
///
/// Como no cliente original, as buscas falham abertas: erro de transporte é
/// logado e vira página vazia / `None`, nunca derruba a tela.

fn url_tmdb(caminho: &str, extras: &str) -> String {
    format!(
        "{}{}?api_key={}&language={}{}",
        config::tmdb_base_url(),
        caminho,
        config::tmdb_api_key(),
        config::tmdb_language(),
        extras
    )
}

async fn get_tmdb<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T, AppError> {
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| AppError::ApiError(format!("Failed to fetch from TMDB: {}", e)))?;

    if !response.status().is_success() {
        return Err(AppError::ApiError(format!(
            "TMDB API error: {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::ApiError(format!("Failed to parse TMDB response: {}", e)))
}

/// Filmes populares, paginados.
pub async fn populares(page: u32) -> PaginaFilmes {
    let client = reqwest::Client::new();
    let url = url_tmdb("/movie/popular", &format!("&page={}", page));

    match get_tmdb::<PaginaFilmes>(&client, &url).await {
        Ok(pagina) => {
            log::debug!("🎬 {} filmes populares (página {})", pagina.results.len(), page);
            pagina
        }
        Err(e) => {
            log::error!("❌ Erro ao buscar filmes populares: {}", e);
            PaginaFilmes::vazia()
        }
    }
}

/// Busca filmes por texto.
pub async fn buscar(query: &str, page: u32) -> PaginaFilmes {
    let client = reqwest::Client::new();
    let url = url_tmdb(
        "/search/movie",
        &format!("&query={}&page={}", urlencoding::encode(query), page),
    );

    match get_tmdb::<PaginaFilmes>(&client, &url).await {
        Ok(pagina) => pagina,
        Err(e) => {
            log::error!("❌ Erro ao pesquisar filmes: {}", e);
            PaginaFilmes::vazia()
        }
    }
}

/// Ficha completa de um filme: detalhes, elenco e vídeos buscados em
/// paralelo e agregados. Qualquer falha vira `None`.
pub async fn detalhes(filme_id: i64) -> Option<FilmeDetalhes> {
    let client = reqwest::Client::new();

    #[derive(serde::Deserialize)]
    struct DetalhesBase {
        #[serde(flatten)]
        filme: Filme,
        #[serde(default)]
        runtime: Option<u32>,
        #[serde(default)]
        genres: Vec<crate::models::Genero>,
    }

    let url_detalhes = url_tmdb(&format!("/movie/{}", filme_id), "");
    let url_creditos = url_tmdb(&format!("/movie/{}/credits", filme_id), "");
    let url_videos = url_tmdb(&format!("/movie/{}/videos", filme_id), "");

    let resultado = futures::try_join!(
        get_tmdb::<DetalhesBase>(&client, &url_detalhes),
        get_tmdb::<Creditos>(&client, &url_creditos),
        get_tmdb::<Videos>(&client, &url_videos),
    );

    match resultado {
        Ok((base, credits, videos)) => Some(FilmeDetalhes {
            filme: base.filme,
            runtime: base.runtime,
            genres: base.genres,
            credits,
            videos,
        }),
        Err(e) => {
            log::error!("❌ Erro ao buscar detalhes do filme {}: {}", filme_id, e);
            None
        }
    }
}
