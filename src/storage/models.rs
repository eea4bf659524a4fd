/// One line of the account file: `<username> <password>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub username: String,
    pub password: String,
}

impl AccountRecord {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Usernames and passwords must not contain whitespace; this is not checked here.
    pub fn to_line(&self) -> String {
        format!("{} {}", self.username, self.password)
    }
}
