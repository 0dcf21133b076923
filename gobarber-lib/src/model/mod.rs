//! Data model types

mod field;
mod user;

pub use field::Field;
pub use user::NewUser;
pub use user::User;
