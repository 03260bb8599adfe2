//! chat_app - Page controllers for the PingBot client
//!
//! Each page owns its local state (form values, loading flag) and exposes
//! the handlers a renderer binds to. Pages mutate the shared
//! [`chat_state::Store`] they are handed by reference, and talk to the
//! outside world through [`auth_client::AuthApi`] and [`ChatTransport`].

pub mod error;
pub mod pages;
pub mod router;
pub mod transport;

pub use error::{ChatAppError, TransportError};
pub use pages::{ChatPage, HomePage, LoginPage, ModalKey, RegisterPage, SendOutcome, SubmitOutcome};
pub use router::{Navigator, Route};
pub use transport::{
    ChannelTransport, ChatTransport, IncomingMessage, PromptEvent, RemoteEnd, TransportEvent,
};
