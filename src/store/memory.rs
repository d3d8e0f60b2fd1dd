//! # In-Memory Client Store
//!
//! Store implementation backed by an in-process ordered map. Store-defined
//! order is key order; key uniqueness is structural.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::model::{Client, ClientFilter};

use super::{ClientStore, StoreError, StoreResult};

/// In-process client store
pub struct MemoryStore {
    clients: RwLock<BTreeMap<String, Client>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientStore for MemoryStore {
    fn find_by_id(&self, id: &str) -> StoreResult<Option<Client>> {
        let clients = self.clients.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(clients.get(id).cloned())
    }

    fn exists(&self, id: &str) -> StoreResult<bool> {
        let clients = self.clients.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(clients.contains_key(id))
    }

    fn save(&self, client: Client) -> StoreResult<Client> {
        let mut clients = self.clients.write().map_err(|_| StoreError::LockPoisoned)?;
        clients.insert(client.id.clone(), client.clone());
        Ok(client)
    }

    fn find_all(&self) -> StoreResult<Vec<Client>> {
        let clients = self.clients.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(clients.values().cloned().collect())
    }

    fn find_page(&self, page_index: usize, per_page: usize) -> StoreResult<Vec<Client>> {
        let clients = self.clients.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(clients
            .values()
            .skip(page_index.saturating_mul(per_page))
            .take(per_page)
            .cloned()
            .collect())
    }

    fn find_by_filter(&self, filter: &ClientFilter) -> StoreResult<Vec<Client>> {
        let clients = self.clients.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(clients
            .values()
            .filter(|client| filter.matches(client))
            .cloned()
            .collect())
    }

    fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let mut clients = self.clients.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(clients.remove(id).is_some())
    }

    fn count(&self) -> StoreResult<u64> {
        let clients = self.clients.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(clients.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: &str, name: &str) -> Client {
        Client {
            id: id.to_string(),
            name: name.to_string(),
            email: None,
        }
    }

    #[test]
    fn test_save_then_find_by_id() {
        let store = MemoryStore::new();
        store.save(client("a", "Ace")).unwrap();

        let found = store.find_by_id("a").unwrap().unwrap();
        assert_eq!(found.name, "Ace");
        assert!(store.find_by_id("missing").unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_existing_record() {
        let store = MemoryStore::new();
        store.save(client("a", "Ace")).unwrap();
        store.save(client("a", "Sabo")).unwrap();

        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.find_by_id("a").unwrap().unwrap().name, "Sabo");
    }

    #[test]
    fn test_exists() {
        let store = MemoryStore::new();
        assert!(!store.exists("a").unwrap());
        store.save(client("a", "Ace")).unwrap();
        assert!(store.exists("a").unwrap());
    }

    #[test]
    fn test_delete_by_id_reports_removal() {
        let store = MemoryStore::new();
        store.save(client("a", "Ace")).unwrap();

        assert!(store.delete_by_id("a").unwrap());
        assert!(!store.delete_by_id("a").unwrap());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_find_all_in_key_order() {
        let store = MemoryStore::new();
        store.save(client("b", "Brook")).unwrap();
        store.save(client("a", "Ace")).unwrap();
        store.save(client("c", "Chopper")).unwrap();

        let ids: Vec<String> = store
            .find_all()
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_find_page_windows_key_order() {
        let store = MemoryStore::new();
        for id in ["a", "b", "c", "d", "e"] {
            store.save(client(id, id)).unwrap();
        }

        let first = store.find_page(0, 2).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].id, "a");

        let second = store.find_page(1, 2).unwrap();
        assert_eq!(second[0].id, "c");

        let last = store.find_page(2, 2).unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].id, "e");

        assert!(store.find_page(3, 2).unwrap().is_empty());
    }

    #[test]
    fn test_find_page_huge_per_page_passes_through() {
        let store = MemoryStore::new();
        store.save(client("a", "Ace")).unwrap();

        let all = store.find_page(0, usize::MAX).unwrap();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_find_by_filter() {
        let store = MemoryStore::new();
        store.save(client("a", "Ace")).unwrap();
        store.save(client("b", "Ace")).unwrap();
        store.save(client("c", "Chopper")).unwrap();

        let aces = store.find_by_filter(&ClientFilter::by_name("Ace")).unwrap();
        assert_eq!(aces.len(), 2);

        let none = store.find_by_filter(&ClientFilter::by_name("Nami")).unwrap();
        assert!(none.is_empty());
    }
}
