use crate::storage::{Storage, CHAVE_FAVORITOS};
use crate::utils::AppError;
use std::sync::Arc;

const CHAVE_USUARIO_ID: &str = "usuarioId";
const CHAVE_USUARIO_NOME: &str = "usuarioNome";

/// Sessão do usuário atual, persistida no storage do cliente.
///
/// Os serviços recebem a sessão por referência em vez de ler estado global,
/// então não há usuário "ambiente" escondido.
#[derive(Clone)]
pub struct Sessao {
    storage: Arc<Storage>,
}

impl Sessao {
    pub fn new(storage: Arc<Storage>) -> Self {
        Sessao { storage }
    }

    pub fn salvar(&self, id: i64, nome: &str) -> Result<(), AppError> {
        self.storage.set_item(CHAVE_USUARIO_ID, id.to_string())?;
        self.storage.set_item(CHAVE_USUARIO_NOME, nome.to_string())?;
        log::info!("👤 Sessão iniciada para usuário {} ({})", id, nome);
        Ok(())
    }

    /// Id do usuário logado, se houver. Valor ilegível conta como deslogado.
    pub fn usuario_id(&self) -> Option<i64> {
        self.storage.get_item(CHAVE_USUARIO_ID)?.parse().ok()
    }

    pub fn usuario_nome(&self) -> Option<String> {
        self.storage.get_item(CHAVE_USUARIO_NOME)
    }

    /// Encerra a sessão. O snapshot de favoritos sai junto: ele pertence ao
    /// usuário que deslogou e não pode vazar para o próximo login.
    pub fn limpar(&self) -> Result<(), AppError> {
        self.storage.remove_item(CHAVE_USUARIO_ID)?;
        self.storage.remove_item(CHAVE_USUARIO_NOME)?;
        self.storage.remove_item(CHAVE_FAVORITOS)?;
        log::info!("👋 Sessão encerrada");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::caminho_temporario;

    #[test]
    fn salvar_ler_limpar() {
        let path = caminho_temporario();
        let sessao = Sessao::new(Arc::new(Storage::abrir(&path)));

        assert_eq!(sessao.usuario_id(), None);

        sessao.salvar(7, "Ana").unwrap();
        assert_eq!(sessao.usuario_id(), Some(7));
        assert_eq!(sessao.usuario_nome(), Some("Ana".to_string()));

        sessao.limpar().unwrap();
        assert_eq!(sessao.usuario_id(), None);
        assert_eq!(sessao.usuario_nome(), None);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn limpar_descarta_snapshot_de_favoritos() {
        let path = caminho_temporario();
        let storage = Arc::new(Storage::abrir(&path));
        let sessao = Sessao::new(storage.clone());
        sessao.salvar(7, "Ana").unwrap();
        storage
            .set_item(CHAVE_FAVORITOS, r#"[{"usuarioId":7,"filmeId":42}]"#.to_string())
            .unwrap();

        sessao.limpar().unwrap();
        assert_eq!(storage.get_item(CHAVE_FAVORITOS), None);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn id_ilegivel_conta_como_deslogado() {
        let path = caminho_temporario();
        let storage = Arc::new(Storage::abrir(&path));
        storage.set_item("usuarioId", "abc".to_string()).unwrap();
        let sessao = Sessao::new(storage);
        assert_eq!(sessao.usuario_id(), None);
        let _ = std::fs::remove_file(path);
    }
}
