use thiserror::Error;

use gridresize::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("invalid resize config: {0}")]
    Config(#[from] ConfigError),
}
