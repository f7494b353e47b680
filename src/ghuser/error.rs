use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhUserError {
    #[error("É necessário informar um usuário com -u ou --user")]
    MissingUser,

    #[error("Erro ao buscar o usuário: {0}")]
    Transport(String),

    #[error("Erro ao decodificar resposta: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Erro de configuração: {0}")]
    Config(String),
}

impl From<reqwest::Error> for GhUserError {
    fn from(err: reqwest::Error) -> Self {
        GhUserError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GhUserError>;
