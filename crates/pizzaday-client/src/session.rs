//! Durable per-browser-profile state: the anonymous user identifier and
//! the selected party date.
//!
//! The store trait exists so tests can inject fixture state instead of
//! touching a real profile file.

use crate::error::Result;
use chrono::NaiveDate;
use pizzaday_proto::PartyDate;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// Storage key for the anonymous identifier.
pub const USER_ID_KEY: &str = "userId";
/// Storage key for the selected party date.
pub const PARTY_DATE_KEY: &str = "pizzaPartyDate";

/// String key/value storage with localStorage semantics.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store: a small JSON object, written through on every
/// mutation so a crash never loses the identifier.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileSessionStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content).unwrap_or_else(|e| {
                debug!("Ignoring unreadable profile file {}: {e}", path.display());
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

/// The client session: owns the store and guarantees a valid identifier
/// exists before anything else runs.
pub struct Session<S: SessionStore> {
    store: S,
    user_id: String,
}

impl<S: SessionStore> Session<S> {
    /// Open a session, acquiring the anonymous identifier. Generates and
    /// persists a UUIDv4 on first use; every later open returns the same
    /// identifier unchanged.
    pub fn open(mut store: S) -> Result<Self> {
        let user_id = match store.get(USER_ID_KEY)? {
            Some(id) if !id.is_empty() => id,
            _ => {
                let id = Uuid::new_v4().to_string();
                store.set(USER_ID_KEY, &id)?;
                info!("Generated new user identifier for this profile");
                id
            }
        };
        Ok(Self { store, user_id })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The previously saved party date, if one was selected before.
    pub fn saved_date(&self) -> Result<Option<PartyDate>> {
        match self.store.get(PARTY_DATE_KEY)? {
            Some(raw) => Ok(PartyDate::parse(&raw).ok()),
            None => Ok(None),
        }
    }

    /// Validate and persist a newly selected date. Past dates and
    /// unparsable input are rejected without touching the store.
    pub fn select_date(&mut self, input: &str, today: NaiveDate) -> Result<PartyDate> {
        let date = PartyDate::select(input, today)?;
        self.store.set(PARTY_DATE_KEY, &date.to_string())?;
        Ok(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn identifier_generated_once_and_reused() {
        let mut store = MemoryStore::new();
        let first = {
            let session = Session::open(&mut store).unwrap();
            session.user_id().to_string()
        };
        assert!(!first.is_empty());

        let session = Session::open(&mut store).unwrap();
        assert_eq!(session.user_id(), first, "identifier must never be regenerated");
    }

    #[test]
    fn identifiers_differ_across_profiles() {
        let a = Session::open(MemoryStore::new()).unwrap();
        let b = Session::open(MemoryStore::new()).unwrap();
        assert_ne!(a.user_id(), b.user_id());
    }

    #[test]
    fn select_date_persists_and_restores() {
        let mut store = MemoryStore::new();
        store.set(USER_ID_KEY, "fixed-id").unwrap();

        let date = {
            let mut session = Session::open(&mut store).unwrap();
            session.select_date("2026-09-01", day("2026-08-27")).unwrap()
        };
        assert_eq!(date.to_string(), "2026-09-01");

        let session = Session::open(&mut store).unwrap();
        assert_eq!(session.saved_date().unwrap(), Some(date));
    }

    #[test]
    fn past_date_rejected_and_not_persisted() {
        let mut session = Session::open(MemoryStore::new()).unwrap();
        assert!(session.select_date("2026-08-20", day("2026-08-27")).is_err());
        assert_eq!(session.saved_date().unwrap(), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");

        let first = {
            let store = FileSessionStore::open(&path).unwrap();
            Session::open(store).unwrap().user_id().to_string()
        };

        let store = FileSessionStore::open(&path).unwrap();
        let session = Session::open(store).unwrap();
        assert_eq!(session.user_id(), first);
    }
}
