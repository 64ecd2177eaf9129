//! Encrypted-at-rest session store.
//!
//! Persists one serialized [`Session`] record to
//! `~/.velo/session.enc`, encrypted with AES-256-GCM. The record format is
//! `v1:` + base64(nonce || ciphertext || tag), nonce 12 bytes. The file
//! format is an implementation detail; no other process reads it.
//!
//! The 256-bit key is derived with SHA-256 from a secret supplied by the
//! host platform's key-management facility. A record that fails to decrypt
//! or parse is treated as absent.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;

use crate::models::Session;
use crate::traits::{SessionStore, StoreError};

/// The store directory name under the home directory.
const STORE_DIR: &str = ".velo";

/// The session record file name.
const STORE_FILE: &str = "session.enc";

/// Version prefix on the stored record.
const RECORD_PREFIX: &str = "v1:";

/// The AES-GCM nonce length in bytes.
const NONCE_LENGTH: usize = 12;

/// Domain-separation salt for key derivation.
const KEY_SALT: &[u8] = b"velo-session-store-v1";

/// File-backed [`SessionStore`] with AES-256-GCM encryption.
pub struct EncryptedFileStore {
    path: PathBuf,
    key: [u8; 32],
}

impl EncryptedFileStore {
    /// Create a store at an explicit path.
    pub fn new(path: PathBuf, secret: &str) -> Self {
        Self {
            path,
            key: derive_key(secret),
        }
    }

    /// Create a store at the default location, `~/.velo/session.enc`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn open_default(secret: &str) -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self::new(home.join(STORE_DIR).join(STORE_FILE), secret))
    }

    /// Path of the record file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn encrypt(&self, plaintext: &str) -> Result<String, StoreError> {
        let cipher = Aes256Gcm::new_from_slice(&self.key)
            .map_err(|e| StoreError::SaveFailed(e.to_string()))?;
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|e| StoreError::SaveFailed(format!("encryption failed: {}", e)))?;

        let mut combined = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
        combined.extend_from_slice(&nonce);
        combined.extend_from_slice(&ciphertext);
        Ok(format!("{}{}", RECORD_PREFIX, BASE64.encode(&combined)))
    }

    fn decrypt(&self, record: &str) -> Option<String> {
        let encoded = record.strip_prefix(RECORD_PREFIX)?;
        let combined = BASE64.decode(encoded.trim()).ok()?;
        if combined.len() <= NONCE_LENGTH {
            return None;
        }
        let (nonce_bytes, ciphertext) = combined.split_at(NONCE_LENGTH);
        let cipher = Aes256Gcm::new_from_slice(&self.key).ok()?;
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .ok()?;
        String::from_utf8(plaintext).ok()
    }
}

/// Derive the AES-256 key from the platform-supplied secret.
fn derive_key(secret: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(KEY_SALT);
    hasher.update(secret.as_bytes());
    hasher.finalize().into()
}

#[async_trait]
impl SessionStore for EncryptedFileStore {
    async fn load(&self) -> Result<Option<Session>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let record = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::LoadFailed(e.to_string()))?;

        // Undecryptable or unparsable records count as absent (fail closed).
        let Some(plaintext) = self.decrypt(&record) else {
            tracing::warn!(path = %self.path.display(), "stored session record is not decodable");
            return Ok(None);
        };
        match serde_json::from_str(&plaintext) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!(error = %e, "stored session record has unexpected shape");
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &Session) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StoreError::SaveFailed(e.to_string()))?;
            }
        }
        let plaintext =
            serde_json::to_string(session).map_err(|e| StoreError::SaveFailed(e.to_string()))?;
        let record = self.encrypt(&plaintext)?;
        fs::write(&self.path, record).map_err(|e| StoreError::SaveFailed(e.to_string()))
    }

    async fn clear(&self) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Ok(());
        }
        fs::remove_file(&self.path).map_err(|e| StoreError::ClearFailed(e.to_string()))
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(temp: &TempDir) -> EncryptedFileStore {
        EncryptedFileStore::new(temp.path().join(STORE_DIR).join(STORE_FILE), "unit-secret")
    }

    fn sample_session() -> Session {
        Session {
            token: "tok-123".to_string(),
            user_id: 42,
            display_name: "Alex".to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn test_derive_key_deterministic() {
        assert_eq!(derive_key("s"), derive_key("s"));
        assert_ne!(derive_key("a"), derive_key("b"));
    }

    #[tokio::test]
    async fn test_load_nonexistent() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        assert_eq!(store.load().await.unwrap(), None);
        assert!(!store.exists().await);
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        let session = sample_session();

        store.save(&session).await.unwrap();
        assert!(store.exists().await);
        assert_eq!(store.load().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn test_record_is_not_plaintext() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        store.save(&sample_session()).await.unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with(RECORD_PREFIX));
        assert!(!raw.contains("tok-123"));
        assert!(!raw.contains("Alex"));
    }

    #[tokio::test]
    async fn test_wrong_key_reads_as_absent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(STORE_FILE);
        let writer = EncryptedFileStore::new(path.clone(), "key-one");
        writer.save(&sample_session()).await.unwrap();

        let reader = EncryptedFileStore::new(path, "key-two");
        assert_eq!(reader.load().await.unwrap(), None);
        // The file itself is untouched.
        assert!(reader.exists().await);
    }

    #[tokio::test]
    async fn test_corrupt_record_reads_as_absent() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not a session record").unwrap();

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        store.save(&sample_session()).await.unwrap();

        store.clear().await.unwrap();
        assert!(!store.exists().await);
        // Clearing again is still success.
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_save_replaces_previous_record() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        store.save(&sample_session()).await.unwrap();

        let mut refreshed = sample_session();
        refreshed.token = "tok-456".to_string();
        store.save(&refreshed).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(refreshed));
    }
}
