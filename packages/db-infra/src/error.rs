use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbInfraError {
    #[error("configuration error: {message}")]
    Config { message: String },
    #[error("connection failed: {message}")]
    Connect { message: String },
    #[error("schema setup failed: {message}")]
    Schema { message: String },
}
