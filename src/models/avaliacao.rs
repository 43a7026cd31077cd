use serde::{Deserialize, Serialize};

/// Avaliação de um filme feita por um usuário (nota + comentário).
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Avaliacao {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub usuario_id: i64,
    pub filme_id: i64,
    pub nota: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comentario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario_nome: Option<String>,
}
