use thiserror::Error;

use crate::batch::BatchError;
use crate::config::ConfigError;
use crate::tokenizer::token::LexError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),
    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

pub type RatlexResult<T> = Result<T, Error>;
