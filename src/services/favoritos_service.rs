use crate::models::Favorito;
use crate::session::Sessao;
use crate::storage::{Storage, CHAVE_FAVORITOS};
use crate::utils::AppError;
use async_trait::async_trait;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Porta para o backend de favoritos. A implementação HTTP fala com o
/// backend real; os testes usam uma implementação em memória.
#[async_trait]
pub trait FavoritosApi: Send + Sync {
    async fn listar(&self, usuario_id: i64) -> Result<Vec<Favorito>, AppError>;
    async fn adicionar(&self, usuario_id: i64, filme_id: i64) -> Result<Favorito, AppError>;
    async fn remover(&self, usuario_id: i64, filme_id: i64) -> Result<(), AppError>;
}

/// Cliente HTTP do endpoint /favoritos do backend.
pub struct HttpFavoritosApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpFavoritosApi {
    pub fn new(base_url: String) -> Self {
        HttpFavoritosApi {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl FavoritosApi for HttpFavoritosApi {
    async fn listar(&self, usuario_id: i64) -> Result<Vec<Favorito>, AppError> {
        let url = format!("{}/favoritos/{}", self.base_url, usuario_id);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to fetch favoritos: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ApiError(format!(
                "Favoritos API error: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse favoritos: {}", e)))
    }

    async fn adicionar(&self, usuario_id: i64, filme_id: i64) -> Result<Favorito, AppError> {
        let url = format!("{}/favoritos", self.base_url);
        let response = self
            .client
            .post(&url)
            .query(&[("usuarioId", usuario_id), ("filmeId", filme_id)])
            .send()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to create favorito: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ApiError(format!(
                "Favoritos API error: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse favorito: {}", e)))
    }

    async fn remover(&self, usuario_id: i64, filme_id: i64) -> Result<(), AppError> {
        let url = format!("{}/favoritos", self.base_url);
        let response = self
            .client
            .delete(&url)
            .query(&[("usuarioId", usuario_id), ("filmeId", filme_id)])
            .send()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to delete favorito: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ApiError(format!(
                "Favoritos API error: {}",
                response.status()
            )));
        }

        Ok(())
    }
}

lazy_static! {
    /// Uma trava de mutação por usuário: fecha a corrida de dois `adicionar`
    /// em voo para o mesmo filme. `listar` não passa por aqui.
    static ref TRAVAS_MUTACAO: Mutex<HashMap<i64, Arc<tokio::sync::Mutex<()>>>> =
        Mutex::new(HashMap::new());
}

fn trava_do_usuario(usuario_id: i64) -> Arc<tokio::sync::Mutex<()>> {
    let mut travas = TRAVAS_MUTACAO.lock().unwrap_or_else(|e| e.into_inner());
    travas.entry(usuario_id).or_default().clone()
}

/// Sincronizador de favoritos: mantém o snapshot local coerente com o
/// backend, que é sempre a fonte de verdade.
///
/// Depois de qualquer mutação a lista completa é rebuscada e o cache é
/// sobrescrito inteiro; nunca há merge parcial. O cache só serve para evitar
/// uma ida extra à rede na checagem de duplicata do `adicionar`.
pub struct FavoritosSync {
    api: Arc<dyn FavoritosApi>,
    storage: Arc<Storage>,
}

impl FavoritosSync {
    pub fn new(api: Arc<dyn FavoritosApi>, storage: Arc<Storage>) -> Self {
        FavoritosSync { api, storage }
    }

    /// Lista os favoritos do usuário logado e sobrescreve o cache local.
    ///
    /// Sem usuário resolvido devolve lista vazia sem tocar na rede; qualquer
    /// outra falha propaga para o chamador distinguir "sem favoritos" de
    /// "requisição falhou".
    pub async fn listar(&self, sessao: &Sessao) -> Result<Vec<Favorito>, AppError> {
        let usuario_id = match sessao.usuario_id() {
            Some(id) => id,
            None => return Ok(Vec::new()),
        };

        let favoritos = self.api.listar(usuario_id).await?;
        self.storage.set_json(CHAVE_FAVORITOS, &favoritos)?;
        log::debug!("📦 Cache de favoritos atualizado ({} itens)", favoritos.len());
        Ok(favoritos)
    }

    /// Adiciona um filme aos favoritos. Idempotente: se o filme já consta no
    /// snapshot (pelo id do registro ou pelo id do filme), não chama a rede e
    /// devolve `None`.
    pub async fn adicionar(
        &self,
        sessao: &Sessao,
        filme_id: i64,
    ) -> Result<Option<Favorito>, AppError> {
        let usuario_id = sessao.usuario_id().ok_or(AppError::NotAuthenticated)?;
        let trava = trava_do_usuario(usuario_id);
        let _guarda = trava.lock().await;

        // Snapshot ausente (ou corrompido) força uma busca fresca para a
        // checagem de duplicata.
        let favoritos = match self.storage.get_json::<Vec<Favorito>>(CHAVE_FAVORITOS) {
            Some(lista) => lista,
            None => {
                let lista = self.api.listar(usuario_id).await?;
                self.storage.set_json(CHAVE_FAVORITOS, &lista)?;
                lista
            }
        };

        // O snapshot pode conter sobras de uma sessão anterior; só registros
        // do usuário atual contam para a checagem de duplicata.
        if favoritos
            .iter()
            .any(|f| f.usuario_id == usuario_id && f.corresponde(filme_id))
        {
            log::debug!("⏭️  Filme {} já é favorito, nada a fazer", filme_id);
            return Ok(None);
        }

        let criado = self.api.adicionar(usuario_id, filme_id).await?;
        log::info!("⭐ Favorito criado: usuário {} filme {}", usuario_id, filme_id);

        // Relista do backend em vez de anexar localmente, para não divergir
        // de mutações feitas por outros clientes.
        let lista = self.api.listar(usuario_id).await?;
        self.storage.set_json(CHAVE_FAVORITOS, &lista)?;
        Ok(Some(criado))
    }

    /// Remove um filme dos favoritos. O DELETE vai para o backend mesmo que o
    /// filme não conste no cache; o snapshot é filtrado em seguida, tratando
    /// cache ausente ou corrompido como vazio.
    pub async fn remover(&self, sessao: &Sessao, filme_id: i64) -> Result<(), AppError> {
        let usuario_id = sessao.usuario_id().ok_or(AppError::NotAuthenticated)?;
        let trava = trava_do_usuario(usuario_id);
        let _guarda = trava.lock().await;

        self.api.remover(usuario_id, filme_id).await?;
        log::info!("🗑️  Favorito removido: usuário {} filme {}", usuario_id, filme_id);

        let favoritos = self
            .storage
            .get_json::<Vec<Favorito>>(CHAVE_FAVORITOS)
            .unwrap_or_default();
        let restantes: Vec<Favorito> = favoritos
            .into_iter()
            .filter(|f| !f.corresponde(filme_id))
            .collect();
        self.storage.set_json(CHAVE_FAVORITOS, &restantes)?;
        Ok(())
    }

    /// Snapshot local atual, sem ir à rede. Cache ausente/corrompido é vazio.
    pub fn snapshot(&self) -> Vec<Favorito> {
        self.storage
            .get_json::<Vec<Favorito>>(CHAVE_FAVORITOS)
            .unwrap_or_default()
    }
}
