pub mod avaliacao_service;
pub mod favoritos_service;
pub mod filme_service;
pub mod usuario_service;

pub use favoritos_service::*;
