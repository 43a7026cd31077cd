use serde::{Deserialize, Serialize};

/// Vínculo usuário -> filme retornado pelo backend.
///
/// O `id` é atribuído pelo servidor; payloads antigos do endpoint de listagem
/// vinham sem ele, por isso é opcional.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Favorito {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub usuario_id: i64,
    pub filme_id: i64,
}

impl Favorito {
    /// Verifica se o registro se refere ao filme informado.
    ///
    /// Dependendo do endpoint, o identificador do favorito pode ser o próprio
    /// id do filme ou um id sintético do servidor. Os dois testes precisam
    /// ser mantidos para não duplicar entradas.
    pub fn corresponde(&self, filme_id: i64) -> bool {
        self.id == Some(filme_id) || self.filme_id == filme_id
    }
}
