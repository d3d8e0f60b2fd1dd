//! # Client Lifecycle Service
//!
//! Enforces the validation and existence rules around the store. This is
//! the only component with designed behavior; everything above it maps
//! transport to these calls and everything below it is keyed storage.
//!
//! Every operation is a single synchronous check-then-act sequence. The
//! check and the act are not atomic: two racing creates for the same id can
//! both pass the existence check, and the second write's outcome is the
//! store's to decide.

use thiserror::Error;

use crate::model::{is_blank, Client, ClientFilter, ClientPatch};
use crate::store::{ClientStore, StoreError};

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Domain failures raised by the client service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Operation targets an id absent from the store
    #[error("Cannot find Client with id: {0}")]
    NotFound(String),

    /// Create targets an id already present
    #[error("Client with id: {0} already exists")]
    AlreadyExists(String),

    /// Validation failure, with one message per failing rule
    #[error("{context}: {}", .messages.join(", "))]
    BadResource {
        context: String,
        messages: Vec<String>,
    },

    /// Infrastructure fault passed through from the store; not part of the
    /// recovered taxonomy
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    fn bad_resource(context: &str, messages: &[&str]) -> Self {
        Self::BadResource {
            context: context.to_string(),
            messages: messages.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Lifecycle and validation rules over a [`ClientStore`].
///
/// Holds no state of its own; all state lives in the store.
pub struct ClientService<S: ClientStore> {
    store: S,
}

impl<S: ClientStore> ClientService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetch a client by id
    pub fn find_by_id(&self, id: &str) -> ServiceResult<Client> {
        match self.store.find_by_id(id)? {
            Some(client) => Ok(client),
            None => Err(ServiceError::NotFound(id.to_string())),
        }
    }

    /// Every client, in store-defined order
    pub fn find_all(&self) -> ServiceResult<Vec<Client>> {
        Ok(self.store.find_all()?)
    }

    /// Clients on the given 1-indexed page.
    ///
    /// Pagination math is the store's; this layer only shifts to the store's
    /// 0-indexed pages. Callers are expected to pass `page_number >= 1` and
    /// `per_page >= 1`; `per_page` has no upper bound and huge values pass
    /// through.
    pub fn find_page(&self, page_number: usize, per_page: usize) -> ServiceResult<Vec<Client>> {
        Ok(self
            .store
            .find_page(page_number.saturating_sub(1), per_page)?)
    }

    /// Clients whose name equals `name`, via the store's query-by-example
    /// evaluator
    pub fn find_by_name(&self, name: &str) -> ServiceResult<Vec<Client>> {
        Ok(self.store.find_by_filter(&ClientFilter::by_name(name))?)
    }

    /// Persist a new client.
    ///
    /// Exactly one existence check against the store, then one write.
    pub fn create(&self, client: Client) -> ServiceResult<Client> {
        if is_blank(&client.name) {
            return Err(ServiceError::bad_resource(
                "Failed to save client",
                &["Client name is null or empty"],
            ));
        }
        if self.store.exists(&client.id)? {
            return Err(ServiceError::AlreadyExists(client.id));
        }
        Ok(self.store.save(client)?)
    }

    /// Replace every field of an existing client
    pub fn update(&self, client: Client) -> ServiceResult<()> {
        if is_blank(&client.name) {
            return Err(ServiceError::bad_resource(
                "Failed to save client",
                &["Client name is null or empty"],
            ));
        }
        if !self.store.exists(&client.id)? {
            return Err(ServiceError::NotFound(client.id));
        }
        self.store.save(client)?;
        Ok(())
    }

    /// Apply the non-blank fields of a patch to an existing client.
    ///
    /// Rejected when both fields are blank; a single usable field suffices.
    pub fn update_name_email(&self, id: &str, patch: ClientPatch) -> ServiceResult<()> {
        let mut client = self.find_by_id(id)?;
        // The lookup above already surfaces NotFound; the existence
        // predicate is consulted once more against the same id before any
        // write happens.
        if !self.store.exists(&client.id)? {
            return Err(ServiceError::NotFound(client.id));
        }
        if patch.is_empty() {
            return Err(ServiceError::bad_resource(
                "Failed to update client",
                &["Client name and email can't be empty"],
            ));
        }
        if let Some(name) = patch.name.filter(|n| !is_blank(n)) {
            client.name = name;
        }
        if let Some(email) = patch.email.filter(|e| !is_blank(e)) {
            client.email = Some(email);
        }
        self.store.save(client)?;
        Ok(())
    }

    /// Remove a client by id
    pub fn delete_by_id(&self, id: &str) -> ServiceResult<()> {
        if !self.store.exists(id)? {
            return Err(ServiceError::NotFound(id.to_string()));
        }
        self.store.delete_by_id(id)?;
        Ok(())
    }

    /// Total number of clients
    pub fn count(&self) -> ServiceResult<u64> {
        Ok(self.store.count()?)
    }
}
