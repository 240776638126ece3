//! Entry repository: per-owner listing and mutation of `app_data`

use crate::domain::entry::validate_title;
use crate::domain::Entry;
use crate::error::{DataHubError, Result};
use crate::infrastructure::collection::ENTRIES;
use crate::infrastructure::KeyValueStore;

pub struct EntryRepository<'s, S: KeyValueStore + ?Sized> {
    store: &'s mut S,
}

impl<'s, S: KeyValueStore + ?Sized> EntryRepository<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        EntryRepository { store }
    }

    /// Entries owned by `owner`, newest first.
    ///
    /// Entries sharing a timestamp are ordered by store position, later
    /// insertions first, so a freshly created entry always leads.
    pub fn list(&self, owner: &str) -> Result<Vec<Entry>> {
        let mut owned: Vec<(usize, Entry)> = ENTRIES
            .load(&*self.store)?
            .into_iter()
            .enumerate()
            .filter(|(_, e)| e.is_owned_by(owner))
            .collect();

        owned.sort_by(|(pos_a, a), (pos_b, b)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| pos_b.cmp(pos_a))
        });

        Ok(owned.into_iter().map(|(_, e)| e).collect())
    }

    pub fn get(&self, id: &str) -> Result<Option<Entry>> {
        Ok(ENTRIES.load(&*self.store)?.into_iter().find(|e| e.id == id))
    }

    pub fn create(&mut self, owner: &str, title: &str, content: &str) -> Result<Entry> {
        validate_title(title)?;

        let entry = Entry::new(owner, title, content);
        ENTRIES.push(&mut *self.store, entry.clone())?;
        log::info!("event=entry_create module=entries status=ok id={}", entry.id);
        Ok(entry)
    }

    /// Replace title and content, keeping id, owner and timestamp.
    /// Returns `None` without writing when the id does not exist.
    pub fn update(&mut self, id: &str, title: &str, content: &str) -> Result<Option<Entry>> {
        validate_title(title)?;

        let mut updated = None;
        ENTRIES.update_where(
            &mut *self.store,
            |e| e.id == id,
            |e| {
                e.title = title.to_string();
                e.content = content.to_string();
                updated = Some(e.clone());
            },
        )?;

        let status = if updated.is_some() { "ok" } else { "missing" };
        log::info!("event=entry_update module=entries status={} id={}", status, id);
        Ok(updated)
    }

    /// Remove the entry. Returns whether anything was removed; repeat calls are no-ops.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let removed = ENTRIES.retain(&mut *self.store, |e| e.id != id)? > 0;
        let status = if removed { "ok" } else { "missing" };
        log::info!("event=entry_delete module=entries status={} id={}", status, id);
        Ok(removed)
    }

    /// Like [`update`](Self::update), but refuses entries owned by someone else
    pub fn update_as(
        &mut self,
        owner: &str,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Option<Entry>> {
        self.check_owner(owner, id)?;
        self.update(id, title, content)
    }

    /// Like [`delete`](Self::delete), but refuses entries owned by someone else
    pub fn delete_as(&mut self, owner: &str, id: &str) -> Result<bool> {
        self.check_owner(owner, id)?;
        self.delete(id)
    }

    /// Missing ids pass; the mutation that follows is then a no-op
    fn check_owner(&self, owner: &str, id: &str) -> Result<()> {
        match self.get(id)? {
            Some(entry) if !entry.is_owned_by(owner) => {
                log::warn!("event=ownership_check module=entries status=forbidden id={}", id);
                Err(DataHubError::Forbidden(id.to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::collection::ENTRIES_KEY;
    use crate::infrastructure::MemoryStore;
    use chrono::DateTime;

    fn entry_at(id: &str, owner: &str, millis: i64) -> Entry {
        Entry {
            id: id.to_string(),
            owner_email: owner.to_string(),
            title: id.to_uppercase(),
            content: String::new(),
            created_at: DateTime::from_timestamp_millis(millis).unwrap(),
        }
    }

    #[test]
    fn test_create_appears_first() {
        let mut store = MemoryStore::new();
        let mut repo = EntryRepository::new(&mut store);

        let first = repo.create("u@test.com", "First", "").unwrap();
        let second = repo.create("u@test.com", "Second", "").unwrap();

        let listed = repo.list("u@test.com").unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[test]
    fn test_create_rejects_empty_title() {
        let mut store = MemoryStore::new();
        let mut repo = EntryRepository::new(&mut store);

        assert!(matches!(
            repo.create("u@test.com", "", "body"),
            Err(DataHubError::Validation(_))
        ));
        assert!(repo.list("u@test.com").unwrap().is_empty());
    }

    #[test]
    fn test_list_orders_by_timestamp_descending() {
        let mut store = MemoryStore::new();
        for entry in [
            entry_at("b", "u@test.com", 2_000),
            entry_at("c", "u@test.com", 3_000),
            entry_at("a", "u@test.com", 1_000),
        ] {
            ENTRIES.push(&mut store, entry).unwrap();
        }

        let repo = EntryRepository::new(&mut store);
        let ids: Vec<String> = repo
            .list("u@test.com")
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_list_ties_prefer_later_insertion() {
        let mut store = MemoryStore::new();
        ENTRIES.push(&mut store, entry_at("older", "u@test.com", 5_000)).unwrap();
        ENTRIES.push(&mut store, entry_at("newer", "u@test.com", 5_000)).unwrap();

        let repo = EntryRepository::new(&mut store);
        let listed = repo.list("u@test.com").unwrap();
        assert_eq!(listed[0].id, "newer");
        assert_eq!(listed[1].id, "older");
    }

    #[test]
    fn test_list_filters_by_owner() {
        let mut store = MemoryStore::new();
        let mut repo = EntryRepository::new(&mut store);
        repo.create("a@x.com", "Mine", "").unwrap();
        repo.create("b@x.com", "Theirs", "").unwrap();

        let listed = repo.list("a@x.com").unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed.iter().all(|e| e.owner_email == "a@x.com"));
        assert!(repo.list("nobody@x.com").unwrap().is_empty());
    }

    #[test]
    fn test_update_keeps_identity() {
        let mut store = MemoryStore::new();
        let mut repo = EntryRepository::new(&mut store);
        let created = repo.create("u@test.com", "T", "C").unwrap();

        let updated = repo.update(&created.id, "T2", "C2").unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.owner_email, created.owner_email);
        assert_eq!(updated.title, "T2");
        assert_eq!(updated.content, "C2");

        assert_eq!(repo.get(&created.id).unwrap(), Some(updated));
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut store = MemoryStore::new();
        let mut repo = EntryRepository::new(&mut store);
        repo.create("u@test.com", "T", "C").unwrap();

        let before = repo.list("u@test.com").unwrap();
        assert_eq!(repo.update("missing", "X", "Y").unwrap(), None);
        assert_eq!(repo.list("u@test.com").unwrap(), before);
    }

    #[test]
    fn test_update_rejects_empty_title() {
        let mut store = MemoryStore::new();
        let mut repo = EntryRepository::new(&mut store);
        let created = repo.create("u@test.com", "T", "C").unwrap();

        assert!(matches!(
            repo.update(&created.id, "", "C2"),
            Err(DataHubError::Validation(_))
        ));
        assert_eq!(repo.get(&created.id).unwrap().unwrap().title, "T");
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = MemoryStore::new();
        let mut repo = EntryRepository::new(&mut store);
        let created = repo.create("u@test.com", "T", "C").unwrap();

        assert!(repo.delete(&created.id).unwrap());
        assert!(!repo.delete(&created.id).unwrap());
        assert!(repo.list("u@test.com").unwrap().is_empty());
    }

    #[test]
    fn test_unchecked_mutation_ignores_owner() {
        let mut store = MemoryStore::new();
        let mut repo = EntryRepository::new(&mut store);
        let theirs = repo.create("b@x.com", "Theirs", "").unwrap();

        // any caller knowing the id can change it
        assert!(repo.update(&theirs.id, "Changed", "").unwrap().is_some());
        assert!(repo.delete(&theirs.id).unwrap());
    }

    #[test]
    fn test_checked_mutation_forbidden() {
        let mut store = MemoryStore::new();
        let mut repo = EntryRepository::new(&mut store);
        let theirs = repo.create("b@x.com", "Theirs", "").unwrap();

        assert!(matches!(
            repo.update_as("a@x.com", &theirs.id, "Changed", ""),
            Err(DataHubError::Forbidden(_))
        ));
        assert!(matches!(
            repo.delete_as("a@x.com", &theirs.id),
            Err(DataHubError::Forbidden(_))
        ));
        assert_eq!(repo.get(&theirs.id).unwrap().unwrap().title, "Theirs");

        // owner passes, missing ids stay no-ops
        assert!(repo.update_as("b@x.com", &theirs.id, "Mine", "").unwrap().is_some());
        assert!(repo.delete_as("b@x.com", &theirs.id).unwrap());
        assert!(!repo.delete_as("a@x.com", &theirs.id).unwrap());
    }

    #[test]
    fn test_reads_entries_with_short_ids() {
        let mut store = MemoryStore::new();
        store
            .set(
                ENTRIES_KEY,
                r#"[{"id":"abc123xyz","userEmail":"u@test.com","title":"Old","content":"","createdAt":1700000000000}]"#
                    .to_string(),
            )
            .unwrap();

        let repo = EntryRepository::new(&mut store);
        let listed = repo.list("u@test.com").unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Old");
    }
}
