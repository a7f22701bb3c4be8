use thiserror::Error;
use tiersim_core::ConfigError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type EngineResult<T> = Result<T, EngineError>;
