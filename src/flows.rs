//! Provider operations, one module per step of the authorization-code dance.
//!
//! Every network-bound operation is an `async fn` on [`MulsiteProvider`] that performs exactly
//! one HTTP call (the callback helper chains two), runs inside an observability span, and
//! surfaces failures immediately. Nothing is retried or cached.
//!
//! [`MulsiteProvider`]: crate::provider::MulsiteProvider

pub mod authorize;
pub mod callback;
pub mod exchange;
pub mod profile;

pub use authorize::*;
pub use callback::*;
