pub mod entities;
pub mod payload;

pub use entities::{User, UserId};
pub use payload::{NewUser, PayloadError};
