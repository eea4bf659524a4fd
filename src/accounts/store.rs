use std::collections::HashMap;

use crate::error::{AccountError, StorageError};
use crate::storage::{AccountFile, AccountRecord};

use super::credentials::{CredentialVerifier, PlainTextVerifier};

/// A registered account and its online flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub online: bool,
}

/// In-memory accounts keyed by username, backed by an append-only file.
pub struct AccountStore {
    accounts: HashMap<String, Account>,
    verifier: Box<dyn CredentialVerifier>,
    file: AccountFile,
}

impl AccountStore {
    /// Empty store that appends new accounts to `file`.
    pub fn new(file: AccountFile) -> Self {
        Self {
            accounts: HashMap::new(),
            verifier: Box::new(PlainTextVerifier),
            file,
        }
    }

    /// Rehydrate the store from `file`.
    ///
    /// An unreadable file is tolerated: the store starts empty.
    pub fn open(file: AccountFile) -> Self {
        let mut store = Self::new(file);
        match store.reload() {
            Ok(count) => log::info!(
                "Loaded {count} account records from {}",
                store.file.path().display()
            ),
            Err(err) => log::warn!("Starting with no accounts: {err}"),
        }
        store
    }

    pub fn with_verifier(mut self, verifier: impl CredentialVerifier + 'static) -> Self {
        self.verifier = Box::new(verifier);
        self
    }

    /// Replay the account file. A later line for the same username wins.
    ///
    /// Returns the number of records read.
    pub fn reload(&mut self) -> Result<usize, StorageError> {
        let records = self.file.load()?;
        let count = records.len();
        for AccountRecord { username, password } in records {
            let online = self
                .accounts
                .get(&username)
                .is_some_and(|account| account.online);
            self.accounts.insert(
                username.clone(),
                Account {
                    username,
                    password,
                    online,
                },
            );
        }
        Ok(count)
    }

    /// Add a new offline account and append it to the account file.
    ///
    /// If the append fails the account still exists for this run and
    /// [`AccountError::Storage`] is returned so the caller can report it.
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), AccountError> {
        if self.accounts.contains_key(username) {
            return Err(AccountError::DuplicateUsername(username.to_string()));
        }

        self.accounts.insert(
            username.to_string(),
            Account {
                username: username.to_string(),
                password: password.to_string(),
                online: false,
            },
        );
        log::info!("Registered account {username}");

        self.file.append(&AccountRecord::new(username, password))?;
        Ok(())
    }

    pub fn validate(&self, username: &str, password: &str) -> bool {
        self.accounts
            .get(username)
            .is_some_and(|account| self.verifier.verify(&account.password, password))
    }

    pub fn set_online(&mut self, username: &str, online: bool) -> Result<(), AccountError> {
        let account = self
            .accounts
            .get_mut(username)
            .ok_or_else(|| AccountError::UnknownUser(username.to_string()))?;
        account.online = online;
        Ok(())
    }

    pub fn is_online(&self, username: &str) -> Option<bool> {
        self.accounts.get(username).map(|account| account.online)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    pub fn get(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn file(&self) -> &AccountFile {
        &self.file
    }
}
