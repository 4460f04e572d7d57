//! Token and user models exchanged with the Mulsite endpoints.

pub mod secret;
pub mod token;
pub mod user;

pub use secret::*;
pub use token::*;
pub use user::*;
