//! Wire models exchanged with the REST API.

pub mod car;
pub mod contact;
pub mod user;

pub use car::{Car, CarInput};
pub use contact::ContactMessage;
pub use user::{Credentials, Token, UserCreate, UserInfo};
