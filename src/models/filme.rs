use serde::{Deserialize, Serialize};

// Payloads do TMDB (campos em snake_case, como na API)

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Filme {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

/// Página de resultados de listagem/busca.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PaginaFilmes {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Filme>,
    #[serde(default)]
    pub total_pages: u32,
}

impl PaginaFilmes {
    /// Página vazia usada como fallback quando a busca falha.
    pub fn vazia() -> Self {
        PaginaFilmes {
            page: 0,
            results: Vec::new(),
            total_pages: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Genero {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MembroElenco {
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Creditos {
    #[serde(default)]
    pub cast: Vec<MembroElenco>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Video {
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub tipo: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Videos {
    #[serde(default)]
    pub results: Vec<Video>,
}

/// Detalhes completos de um filme: ficha + elenco + trailers,
/// agregados de três chamadas ao TMDB.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FilmeDetalhes {
    #[serde(flatten)]
    pub filme: Filme,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genero>,
    #[serde(default)]
    pub credits: Creditos,
    #[serde(default)]
    pub videos: Videos,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializa_pagina_de_busca() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 550, "title": "Fight Club", "vote_average": 8.4, "poster_path": "/x.jpg"}
            ],
            "total_pages": 3
        }"#;
        let pagina: PaginaFilmes = serde_json::from_str(json).unwrap();
        assert_eq!(pagina.results.len(), 1);
        assert_eq!(pagina.results[0].id, 550);
        assert_eq!(pagina.total_pages, 3);
    }

    #[test]
    fn deserializa_videos_com_campo_type() {
        let json = r#"{"results":[{"key":"abc","site":"YouTube","type":"Trailer"}]}"#;
        let videos: Videos = serde_json::from_str(json).unwrap();
        assert_eq!(videos.results[0].tipo, "Trailer");
    }
}
