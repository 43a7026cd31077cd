use crate::utils::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

/// Chave do snapshot de favoritos do usuário logado. Escrita pelo
/// sincronizador e removida junto com a sessão.
pub const CHAVE_FAVORITOS: &str = "favoritos";

/// Armazenamento chave/valor persistente do cliente (equivalente ao
/// localStorage do navegador).
///
/// O conteúdo inteiro é gravado em um único arquivo JSON a cada escrita.
/// Arquivo ausente ou corrompido é tratado como armazenamento vazio.
pub struct Storage {
    path: PathBuf,
    dados: RwLock<HashMap<String, String>>,
}

impl Storage {
    pub fn abrir(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let dados = match std::fs::read_to_string(&path) {
            Ok(conteudo) => match serde_json::from_str::<HashMap<String, String>>(&conteudo) {
                Ok(mapa) => mapa,
                Err(e) => {
                    log::warn!("⚠️  Storage corrompido em {:?}, recomeçando vazio: {}", path, e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Storage {
            path,
            dados: RwLock::new(dados),
        }
    }

    pub fn get_item(&self, chave: &str) -> Option<String> {
        self.dados.read().ok()?.get(chave).cloned()
    }

    pub fn set_item(&self, chave: &str, valor: String) -> Result<(), AppError> {
        let mut dados = self
            .dados
            .write()
            .map_err(|e| AppError::StorageError(e.to_string()))?;
        dados.insert(chave.to_string(), valor);
        self.gravar(&dados)
    }

    pub fn remove_item(&self, chave: &str) -> Result<(), AppError> {
        let mut dados = self
            .dados
            .write()
            .map_err(|e| AppError::StorageError(e.to_string()))?;
        dados.remove(chave);
        self.gravar(&dados)
    }

    /// Lê e desserializa um valor. Valor ausente ou que não parseia vira
    /// `None` (corrupção é logada, nunca propaga erro).
    pub fn get_json<T: DeserializeOwned>(&self, chave: &str) -> Option<T> {
        let bruto = self.get_item(chave)?;
        match serde_json::from_str(&bruto) {
            Ok(valor) => Some(valor),
            Err(e) => {
                log::warn!("⚠️  Valor inválido no storage para '{}': {}", chave, e);
                None
            }
        }
    }

    pub fn set_json<T: Serialize>(&self, chave: &str, valor: &T) -> Result<(), AppError> {
        let bruto =
            serde_json::to_string(valor).map_err(|e| AppError::StorageError(e.to_string()))?;
        self.set_item(chave, bruto)
    }

    fn gravar(&self, dados: &HashMap<String, String>) -> Result<(), AppError> {
        let conteudo =
            serde_json::to_string(dados).map_err(|e| AppError::StorageError(e.to_string()))?;
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)
                    .map_err(|e| AppError::StorageError(e.to_string()))?;
            }
        }
        std::fs::write(&self.path, conteudo).map_err(|e| AppError::StorageError(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    static CONTADOR: AtomicU64 = AtomicU64::new(0);

    /// Caminho único por teste para não compartilhar arquivo entre eles.
    pub(crate) fn caminho_temporario() -> PathBuf {
        let n = CONTADOR.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "cineclub-storage-{}-{}.json",
            std::process::id(),
            n
        ))
    }

    #[test]
    fn set_get_remove() {
        let path = caminho_temporario();
        let storage = Storage::abrir(&path);
        storage.set_item("usuarioId", "7".to_string()).unwrap();
        assert_eq!(storage.get_item("usuarioId"), Some("7".to_string()));
        storage.remove_item("usuarioId").unwrap();
        assert_eq!(storage.get_item("usuarioId"), None);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn persiste_entre_instancias() {
        let path = caminho_temporario();
        {
            let storage = Storage::abrir(&path);
            storage.set_item("usuarioNome", "Ana".to_string()).unwrap();
        }
        let reaberto = Storage::abrir(&path);
        assert_eq!(reaberto.get_item("usuarioNome"), Some("Ana".to_string()));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn arquivo_corrompido_vira_vazio() {
        let path = caminho_temporario();
        std::fs::write(&path, "isto não é json {{{").unwrap();
        let storage = Storage::abrir(&path);
        assert_eq!(storage.get_item("qualquer"), None);
        // continua utilizável depois da corrupção
        storage.set_item("a", "1".to_string()).unwrap();
        assert_eq!(storage.get_item("a"), Some("1".to_string()));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn valor_json_invalido_vira_none() {
        let path = caminho_temporario();
        let storage = Storage::abrir(&path);
        storage.set_item("favoritos", "[{corrompido".to_string()).unwrap();
        let lido: Option<Vec<crate::models::Favorito>> = storage.get_json("favoritos");
        assert!(lido.is_none());
        let _ = std::fs::remove_file(path);
    }
}
