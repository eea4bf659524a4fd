pub mod credentials;
pub mod store;

pub use credentials::{CredentialVerifier, PlainTextVerifier};
pub use store::{Account, AccountStore};
