pub mod auth;

use keyring::Entry;
use tracing::debug;

use crate::config::KeyringConfig;
use crate::error::Result;

/// A single secret slot in some secure storage.
///
/// `get` returns `Ok(None)` when the slot is empty; any other backend problem
/// is an error.
pub trait SecretStore {
    fn get(&self) -> Result<Option<String>>;
    fn set(&self, secret: &str) -> Result<()>;
    fn delete(&self) -> Result<()>;
}

/// OS keychain entry addressed by `(service, account)`.
pub struct KeyringStore {
    service: String,
    account: String,
    entry: Entry,
}

impl KeyringStore {
    pub fn new(config: &KeyringConfig) -> Result<Self> {
        let entry = Entry::new(&config.service, &config.account)?;
        Ok(Self {
            service: config.service.clone(),
            account: config.account.clone(),
            entry,
        })
    }
}

impl SecretStore for KeyringStore {
    fn get(&self) -> Result<Option<String>> {
        debug!(service = %self.service, account = %self.account, "looking up API key");
        match self.entry.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, secret: &str) -> Result<()> {
        debug!(service = %self.service, account = %self.account, "storing API key");
        self.entry.set_password(secret)?;
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        debug!(service = %self.service, account = %self.account, "deleting API key");
        self.entry.delete_credential()?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;
    use crate::error::Error;

    #[test]
    fn set_then_get_round_trips() {
        let store = MemoryStore::default();
        store.set("token-123").unwrap();
        assert_eq!(store.get().unwrap(), Some("token-123".to_string()));
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let store = MemoryStore::with_secret("token-123");
        store.delete().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn backend_failure_is_an_error() {
        let store = MemoryStore::failing();
        assert!(matches!(store.get(), Err(Error::CredentialBackend(_))));
    }

    fn mock_keyring_store() -> KeyringStore {
        keyring::set_default_credential_builder(keyring::mock::default_credential_builder());
        KeyringStore::new(&KeyringConfig {
            service: "de-test".into(),
            account: "work".into(),
        })
        .unwrap()
    }

    fn fail_next_call(store: &KeyringStore) {
        store
            .entry
            .get_credential()
            .downcast_ref::<keyring::mock::MockCredential>()
            .unwrap()
            .set_error(keyring::Error::PlatformFailure("keychain locked".into()));
    }

    #[test]
    fn keyring_store_round_trips_and_deletes() {
        let store = mock_keyring_store();
        assert_eq!(store.get().unwrap(), None);

        store.set("token-123").unwrap();
        assert_eq!(store.get().unwrap(), Some("token-123".to_string()));

        store.delete().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn keyring_store_delete_of_missing_entry_passes_error_through() {
        let store = mock_keyring_store();
        let err = store.delete().unwrap_err();
        assert!(matches!(err, Error::CredentialBackend(keyring::Error::NoEntry)));
    }

    #[test]
    fn keyring_store_backend_failure_is_not_treated_as_missing() {
        let store = mock_keyring_store();
        store.set("token-123").unwrap();

        fail_next_call(&store);
        let err = store.get().unwrap_err();
        assert!(matches!(
            err,
            Error::CredentialBackend(keyring::Error::PlatformFailure(_))
        ));

        fail_next_call(&store);
        assert!(matches!(store.set("other"), Err(Error::CredentialBackend(_))));
        assert_eq!(store.get().unwrap(), Some("token-123".to_string()));
    }
}
