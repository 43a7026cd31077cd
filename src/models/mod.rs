pub mod avaliacao;
pub mod favorito;
pub mod filme;
pub mod usuario;

pub use avaliacao::*;
pub use favorito::*;
pub use filme::*;
pub use usuario::*;
