use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Operação exige usuário logado e a sessão não tem um id resolvido.
    NotAuthenticated,
    ApiError(String),
    StorageError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotAuthenticated => write!(f, "Usuário não está logado."),
            AppError::ApiError(msg) => write!(f, "API error: {}", msg),
            AppError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
