use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("transport closed")]
    Closed,

    #[error("send failed: {0}")]
    Send(String),
}

#[derive(Error, Debug)]
pub enum ChatAppError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Auth error: {0}")]
    Auth(#[from] auth_client::AuthError),
}
