// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Repository contract and the in-memory backend.
//!
//! Controllers talk to storage through the synchronous [`Repository`]
//! trait. Mutations are staged and committed by a single
//! [`save`](Repository::save), so an action never leaves half of its
//! changes applied.
//!
//! # Memory Backend
//!
//! ```text
//! MemoryRepository (handle)
//! ├── store: Arc<RwLock<BTreeMap<K, E>>>   shared by every clone
//! └── pending: Mutex<Vec<Change>>          private to the handle
//!
//! add / update / delete ──► pending ──save()──► store
//! ```

use std::{
    collections::BTreeMap,
    fmt::{self, Debug, Display},
    sync::{
        Arc, Mutex, RwLock,
        atomic::{AtomicU64, Ordering}
    }
};

use thiserror::Error;

use crate::{
    paging::Pagination,
    rules::{RuleViolations, Validate}
};

/// Storage collaborator of the controller.
///
/// Reads return owned entities; changes become visible after
/// [`save`](Self::save).
pub trait Repository<E>: Send + Sync {
    /// Key type; rendered with `Display` for redirects and not-found views.
    type Key: Display;

    /// Error type for repository operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// All entities in key order.
    ///
    /// # Errors
    ///
    /// Backend failure.
    fn get_all(&self) -> Result<Vec<E>, Self::Error>;

    /// Entity by key, `None` if absent.
    ///
    /// # Errors
    ///
    /// Backend failure.
    fn get(&self, key: &Self::Key) -> Result<Option<E>, Self::Error>;

    /// Stage a new entity, assigning its key when keys are generated.
    ///
    /// # Errors
    ///
    /// Backend failure.
    fn add(&self, entity: &mut E) -> Result<(), Self::Error>;

    /// Stage changes to an existing entity.
    ///
    /// # Errors
    ///
    /// Backend failure.
    fn update(&self, entity: &E) -> Result<(), Self::Error>;

    /// Stage removal of an entity.
    ///
    /// # Errors
    ///
    /// Backend failure.
    fn delete(&self, entity: &E) -> Result<(), Self::Error>;

    /// Commit every staged change.
    ///
    /// # Errors
    ///
    /// Backend failure; nothing is committed and the staged changes are
    /// dropped.
    fn save(&self) -> Result<(), Self::Error>;

    /// Number of entities.
    ///
    /// # Errors
    ///
    /// Backend failure.
    fn count(&self) -> Result<usize, Self::Error> {
        Ok(self.get_all()?.len())
    }

    /// One window of entities in key order.
    ///
    /// # Errors
    ///
    /// Backend failure.
    fn list(&self, pagination: Pagination) -> Result<Vec<E>, Self::Error> {
        Ok(pagination.apply(self.get_all()?))
    }
}

/// Failure of the in-memory backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// An update or delete targeted a key that is not stored.
    #[error("no entity with key {0}")]
    NotFound(String),

    /// An added entity carries a key that is already stored.
    #[error("an entity with key {0} already exists")]
    DuplicateKey(String),

    /// Validation on save rejected a staged entity.
    #[error(transparent)]
    Violations(#[from] RuleViolations)
}

enum Change<E, K> {
    Insert(K, E),
    Replace(K, E),
    Remove(K)
}

impl<E, K> Change<E, K> {
    fn entity(&self) -> Option<&E> {
        match self {
            Self::Insert(_, e) | Self::Replace(_, e) => Some(e),
            Self::Remove(_) => None
        }
    }
}

// Staged changes are applied to a copy so a failing change commits nothing.
fn apply<E: Clone, K: Ord + Clone + Display>(
    rows: &BTreeMap<K, E>,
    changes: &[Change<E, K>]
) -> Result<BTreeMap<K, E>, RepositoryError> {
    let mut staged = rows.clone();
    for change in changes {
        match change {
            Change::Insert(key, entity) => {
                if staged.contains_key(key) {
                    return Err(RepositoryError::DuplicateKey(key.to_string()));
                }
                staged.insert(key.clone(), entity.clone());
            }
            Change::Replace(key, entity) => {
                let row = staged
                    .get_mut(key)
                    .ok_or_else(|| RepositoryError::NotFound(key.to_string()))?;
                *row = entity.clone();
            }
            Change::Remove(key) => {
                staged
                    .remove(key)
                    .ok_or_else(|| RepositoryError::NotFound(key.to_string()))?;
            }
        }
    }
    Ok(staged)
}

/// Assigns a generated key to a new entity.
///
/// Receives the next sequence value; returns `false` if the entity already
/// carries a key and was left untouched. Values whose key is already stored
/// are skipped, so the assigner never has to look at the store.
pub type KeyAssigner<E> = fn(&mut E, u64) -> bool;

struct Store<E, K> {
    rows:     RwLock<BTreeMap<K, E>>,
    sequence: AtomicU64
}

/// In-memory repository with a per-handle unit of work.
///
/// # Example
///
/// ```rust,ignore
/// let products = MemoryRepository::new(|p: &Product| p.product_id)
///     .with_key_assigner(|p, next| {
///         if p.product_id != 0 { return false; }
///         p.product_id = next as i32;
///         true
///     })
///     .validate_on_save(true);
/// products.seed([football, surf_board]);
/// ```
pub struct MemoryRepository<E, K> {
    store:            Arc<Store<E, K>>,
    pending:          Mutex<Vec<Change<E, K>>>,
    key_of:           fn(&E) -> K,
    assign_key:       Option<KeyAssigner<E>>,
    validate_on_save: bool
}

impl<E, K: Ord> MemoryRepository<E, K> {
    /// Create an empty repository keyed by `key_of`.
    pub fn new(key_of: fn(&E) -> K) -> Self {
        Self {
            store: Arc::new(Store {
                rows:     RwLock::new(BTreeMap::new()),
                sequence: AtomicU64::new(0)
            }),
            pending: Mutex::new(Vec::new()),
            key_of,
            assign_key: None,
            validate_on_save: false
        }
    }

    /// Generate keys for added entities.
    #[must_use]
    pub fn with_key_assigner(mut self, assign: KeyAssigner<E>) -> Self {
        self.assign_key = Some(assign);
        self
    }

    /// Check rule violations of staged entities on save.
    #[must_use]
    pub const fn validate_on_save(mut self, enabled: bool) -> Self {
        self.validate_on_save = enabled;
        self
    }

    /// Store entities directly, bypassing the unit of work.
    ///
    /// Generated keys skip any seeded key, so seeding sparse keys is safe.
    pub fn seed(&self, entities: impl IntoIterator<Item = E>) {
        let mut rows = self.store.rows.write().unwrap_or_else(|e| e.into_inner());
        for entity in entities {
            rows.insert((self.key_of)(&entity), entity);
        }
        let seeded = u64::try_from(rows.len()).unwrap_or(u64::MAX);
        self.store.sequence.fetch_max(seeded, Ordering::SeqCst);
    }

    /// Number of staged, uncommitted changes.
    pub fn pending_changes(&self) -> usize {
        self.pending.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Drop staged changes.
    pub fn discard(&self) {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    // A sequence value is only consumed once the assigner accepts it, and
    // values that map onto stored keys are passed over.
    fn generate_key(&self, entity: &mut E, assign: KeyAssigner<E>)
    where
        E: Clone
    {
        let rows = self.store.rows.read().unwrap_or_else(|e| e.into_inner());
        let sequence = &self.store.sequence;
        let mut current = sequence.load(Ordering::SeqCst);
        loop {
            let next = current.saturating_add(1);
            let mut candidate = entity.clone();
            if !assign(&mut candidate, next) {
                return;
            }
            if let Err(actual) =
                sequence.compare_exchange(current, next, Ordering::SeqCst, Ordering::SeqCst)
            {
                current = actual;
                continue;
            }
            current = next;
            if !rows.contains_key(&(self.key_of)(&candidate)) {
                *entity = candidate;
                return;
            }
        }
    }

    fn stage(&self, change: Change<E, K>) {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(change);
    }
}

impl<E, K> Clone for MemoryRepository<E, K> {
    /// Clones share the store but start with an empty unit of work.
    fn clone(&self) -> Self {
        Self {
            store:            Arc::clone(&self.store),
            pending:          Mutex::new(Vec::new()),
            key_of:           self.key_of,
            assign_key:       self.assign_key,
            validate_on_save: self.validate_on_save
        }
    }
}

impl<E, K> Debug for MemoryRepository<E, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.store.rows.read().map(|r| r.len()).unwrap_or(0);
        f.debug_struct("MemoryRepository")
            .field("rows", &rows)
            .field("validate_on_save", &self.validate_on_save)
            .finish_non_exhaustive()
    }
}

impl<E, K> Repository<E> for MemoryRepository<E, K>
where
    E: Clone + Validate + Send + Sync,
    K: Ord + Clone + Display + Send + Sync
{
    type Key = K;
    type Error = RepositoryError;

    fn get_all(&self) -> Result<Vec<E>, Self::Error> {
        let rows = self.store.rows.read().unwrap_or_else(|e| e.into_inner());
        Ok(rows.values().cloned().collect())
    }

    fn get(&self, key: &K) -> Result<Option<E>, Self::Error> {
        let rows = self.store.rows.read().unwrap_or_else(|e| e.into_inner());
        Ok(rows.get(key).cloned())
    }

    fn add(&self, entity: &mut E) -> Result<(), Self::Error> {
        if let Some(assign) = self.assign_key {
            self.generate_key(entity, assign);
        }
        let key = (self.key_of)(entity);
        tracing::trace!(key = %key, "staging insert");
        self.stage(Change::Insert(key, entity.clone()));
        Ok(())
    }

    fn update(&self, entity: &E) -> Result<(), Self::Error> {
        let key = (self.key_of)(entity);
        tracing::trace!(key = %key, "staging update");
        self.stage(Change::Replace(key, entity.clone()));
        Ok(())
    }

    fn delete(&self, entity: &E) -> Result<(), Self::Error> {
        let key = (self.key_of)(entity);
        tracing::trace!(key = %key, "staging delete");
        self.stage(Change::Remove(key));
        Ok(())
    }

    fn save(&self) -> Result<(), Self::Error> {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        let changes = std::mem::take(&mut *pending);

        if self.validate_on_save
            && let Some(violations) = changes
                .iter()
                .filter_map(Change::entity)
                .find_map(|entity| entity.check_rule_violations().err())
        {
            return Err(violations.into());
        }

        let mut rows = self.store.rows.write().unwrap_or_else(|e| e.into_inner());
        *rows = apply(&rows, &changes)?;
        tracing::trace!(changes = changes.len(), "unit of work committed");
        Ok(())
    }

    fn count(&self) -> Result<usize, Self::Error> {
        Ok(self.store.rows.read().unwrap_or_else(|e| e.into_inner()).len())
    }

    fn list(&self, pagination: Pagination) -> Result<Vec<E>, Self::Error> {
        let rows = self.store.rows.read().unwrap_or_else(|e| e.into_inner());
        Ok(pagination.apply(rows.values().cloned()))
    }
}
