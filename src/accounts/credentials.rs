/// Compares a stored secret with the one a user just typed.
///
/// Every credential check in the crate goes through this trait, so a hashed
/// scheme only needs a new implementation here.
pub trait CredentialVerifier {
    fn verify(&self, stored: &str, supplied: &str) -> bool;
}

/// Exact, case-sensitive comparison of plain-text passwords.
///
/// Passwords are stored unhashed in the account file. This is a known weakness
/// kept for compatibility with existing account files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextVerifier;

impl CredentialVerifier for PlainTextVerifier {
    fn verify(&self, stored: &str, supplied: &str) -> bool {
        stored == supplied
    }
}
