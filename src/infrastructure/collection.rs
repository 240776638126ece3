//! Typed JSON collections stored under fixed keys

use crate::domain::{Account, Entry};
use crate::error::{DataHubError, Result};
use crate::infrastructure::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

pub const USERS_KEY: &str = "app_users";
pub const ENTRIES_KEY: &str = "app_data";
/// Raw email string, not JSON
pub const SESSION_KEY: &str = "currentUser";

pub const USERS: Collection<Account> = Collection::new(USERS_KEY);
pub const ENTRIES: Collection<Entry> = Collection::new(ENTRIES_KEY);

/// A JSON array of `T` held under one store key.
///
/// Each mutating helper is a single load-modify-save against a `&mut`
/// store, which keeps every per-record change on one writer.
#[derive(Debug)]
pub struct Collection<T> {
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> Collection<T> {
    pub const fn new(key: &'static str) -> Self {
        Collection {
            key,
            _marker: PhantomData,
        }
    }

    /// Load all records. A missing or empty key is an empty collection.
    pub fn load<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<Vec<T>> {
        match store.get(self.key) {
            None => Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(raw).map_err(|e| {
                DataHubError::Store(format!("Corrupt collection '{}': {}", self.key, e))
            }),
        }
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S, records: &[T]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        store.set(self.key, raw)
    }

    pub fn push<S: KeyValueStore + ?Sized>(&self, store: &mut S, record: T) -> Result<()> {
        let mut records = self.load(store)?;
        records.push(record);
        self.save(store, &records)
    }

    /// Apply `update` to every record matching `predicate`.
    /// Returns the number of records changed; nothing is written when zero.
    pub fn update_where<S, P, F>(&self, store: &mut S, predicate: P, mut update: F) -> Result<usize>
    where
        S: KeyValueStore + ?Sized,
        P: Fn(&T) -> bool,
        F: FnMut(&mut T),
    {
        let mut records = self.load(store)?;
        let mut changed = 0;
        for record in records.iter_mut().filter(|r| predicate(&**r)) {
            update(record);
            changed += 1;
        }

        if changed > 0 {
            self.save(store, &records)?;
        }
        Ok(changed)
    }

    /// Keep only records matching `keep`. Returns the number removed.
    pub fn retain<S, P>(&self, store: &mut S, keep: P) -> Result<usize>
    where
        S: KeyValueStore + ?Sized,
        P: Fn(&T) -> bool,
    {
        let mut records = self.load(store)?;
        let before = records.len();
        records.retain(|r| keep(r));
        let removed = before - records.len();

        if removed > 0 {
            self.save(store, &records)?;
        }
        Ok(removed)
    }
}
