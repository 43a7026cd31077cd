use cineclub_client::models::{LoginRequest, RegistroRequest};
use cineclub_client::services::favoritos_service::{FavoritosSync, HttpFavoritosApi};
use cineclub_client::services::{avaliacao_service, filme_service, usuario_service};
use cineclub_client::session::Sessao;
use cineclub_client::storage::Storage;
use cineclub_client::{config, utils::AppError};
use dotenv::dotenv;
use std::sync::Arc;

fn uso() {
    eprintln!("Uso: cineclub-client <comando> [args]");
    eprintln!("  registrar <nome> <email> <senha>");
    eprintln!("  login <email> <senha>");
    eprintln!("  logout");
    eprintln!("  favoritos");
    eprintln!("  adicionar <filmeId>");
    eprintln!("  remover <filmeId>");
    eprintln!("  populares [pagina]");
    eprintln!("  buscar <texto>");
    eprintln!("  avaliar <filmeId> <nota> [comentario]");
    eprintln!("  avaliacoes <filmeId>");
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("🎬 CineClub client");
    log::info!("🌐 Backend: {}", config::api_url());

    let storage = Arc::new(Storage::abrir(config::storage_path()));
    let sessao = Sessao::new(storage.clone());
    let api = Arc::new(HttpFavoritosApi::new(config::api_url()));
    let favoritos = FavoritosSync::new(api, storage);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let resultado = executar(&args, &sessao, &favoritos).await;

    if let Err(e) = resultado {
        log::error!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn executar(
    args: &[String],
    sessao: &Sessao,
    favoritos: &FavoritosSync,
) -> Result<(), AppError> {
    let comando = match args.first() {
        Some(c) => c.as_str(),
        None => {
            uso();
            return Ok(());
        }
    };

    match (comando, &args[1..]) {
        ("registrar", [nome, email, senha]) => {
            let usuario = usuario_service::registrar(&RegistroRequest {
                nome: nome.clone(),
                email: email.clone(),
                senha: senha.clone(),
            })
            .await?;
            sessao.salvar(usuario.id, &usuario.nome)?;
        }
        ("login", [email, senha]) => {
            let usuario = usuario_service::login(&LoginRequest {
                email: email.clone(),
                senha: senha.clone(),
            })
            .await?;
            sessao.salvar(usuario.id, &usuario.nome)?;
        }
        ("logout", []) => sessao.limpar()?,
        ("favoritos", []) => {
            for fav in favoritos.listar(sessao).await? {
                println!("⭐ filme {}", fav.filme_id);
            }
        }
        ("adicionar", [filme_id]) => {
            let filme_id = parse_id(filme_id)?;
            match favoritos.adicionar(sessao, filme_id).await? {
                Some(_) => println!("⭐ Filme {} adicionado aos favoritos", filme_id),
                None => println!("Filme {} já era favorito", filme_id),
            }
        }
        ("remover", [filme_id]) => {
            favoritos.remover(sessao, parse_id(filme_id)?).await?;
        }
        ("populares", resto) => {
            let pagina = resto.first().and_then(|p| p.parse().ok()).unwrap_or(1);
            for filme in filme_service::populares(pagina).await.results {
                println!("🎬 {} — {}", filme.id, filme.title);
            }
        }
        ("buscar", [texto]) => {
            for filme in filme_service::buscar(texto, 1).await.results {
                println!("🎬 {} — {}", filme.id, filme.title);
            }
        }
        ("avaliar", [filme_id, nota, resto @ ..]) => {
            let nota = nota
                .parse()
                .map_err(|_| AppError::ApiError("nota inválida".to_string()))?;
            let comentario = resto.first().map(|s| s.as_str());
            avaliacao_service::criar_avaliacao(sessao, parse_id(filme_id)?, nota, comentario)
                .await?;
        }
        ("avaliacoes", [filme_id]) => {
            for avaliacao in avaliacao_service::listar_por_filme(parse_id(filme_id)?).await {
                println!(
                    "⭐ {} — {}",
                    avaliacao.nota,
                    avaliacao.comentario.as_deref().unwrap_or("")
                );
            }
        }
        _ => uso(),
    }

    Ok(())
}

fn parse_id(bruto: &str) -> Result<i64, AppError> {
    bruto
        .parse()
        .map_err(|_| AppError::ApiError(format!("filmeId inválido: {}", bruto)))
}
