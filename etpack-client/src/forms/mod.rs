//! Department form-list synchronizer
//!
//! Holds the ordered form checklist of one department. Every change is
//! mirrored to the remote store and to the local cache slot
//! `formOrder:<department>`. The remote write runs in the background and is
//! never awaited by the synchronizer itself; two overlapping writes settle
//! in whatever order the network answers them.

mod remote;
mod reorder;

pub use remote::RemoteFormStore;
pub use reorder::reorder;

use std::collections::HashSet;
use std::sync::Arc;

use shared::{Department, FormDescriptor};
use tokio::task::JoinHandle;

use crate::outcome::{Degradation, Outcome, WriteOutcome};
use crate::storage::LocalStorage;

/// State of the background remote write started by a persist
#[derive(Debug)]
pub enum RemoteWrite {
    InFlight(JoinHandle<WriteOutcome>),
    /// Never started (no async runtime available)
    Dropped(Degradation),
}

impl RemoteWrite {
    /// Wait for the remote write to finish
    pub async fn settled(self) -> WriteOutcome {
        match self {
            Self::InFlight(handle) => handle
                .await
                .unwrap_or_else(|e| WriteOutcome::Dropped(Degradation::Remote(e.to_string()))),
            Self::Dropped(reason) => WriteOutcome::Dropped(reason),
        }
    }
}

/// Result of mirroring a list to both stores
#[derive(Debug)]
pub struct Persisted {
    pub local: WriteOutcome,
    pub remote: RemoteWrite,
}

/// Form checklist of one department
pub struct FormListSynchronizer {
    department: Department,
    defaults: Vec<FormDescriptor>,
    forms: Vec<FormDescriptor>,
    new_names: HashSet<String>,
    remote: Arc<dyn RemoteFormStore>,
    cache: Arc<dyn LocalStorage>,
}

impl FormListSynchronizer {
    /// Start from the department's hardcoded default list
    pub fn new(
        department: Department,
        remote: Arc<dyn RemoteFormStore>,
        cache: Arc<dyn LocalStorage>,
    ) -> Self {
        let defaults = department.default_forms();
        Self {
            department,
            forms: defaults.clone(),
            defaults,
            new_names: HashSet::new(),
            remote,
            cache,
        }
    }

    /// Replace the default list (and the current list with it)
    pub fn with_defaults(mut self, defaults: Vec<FormDescriptor>) -> Self {
        self.forms = defaults.clone();
        self.defaults = defaults;
        self.new_names.clear();
        self
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn forms(&self) -> &[FormDescriptor] {
        &self.forms
    }

    pub fn defaults(&self) -> &[FormDescriptor] {
        &self.defaults
    }

    /// Whether `name` was added on top of the default list
    pub fn is_new(&self, name: &str) -> bool {
        self.new_names.contains(name)
    }

    pub fn new_names(&self) -> &HashSet<String> {
        &self.new_names
    }

    /// Load the remote list, falling back to the defaults when it is
    /// unavailable or empty
    pub async fn fetch_department_list(&mut self) -> Outcome<Vec<FormDescriptor>> {
        match self.remote.fetch_forms(self.department).await {
            Ok(forms) if !forms.is_empty() => {
                self.new_names = forms
                    .iter()
                    .filter(|form| !self.defaults.iter().any(|d| d.name == form.name))
                    .map(|form| form.name.clone())
                    .collect();
                self.forms = forms;
                Outcome::Fresh(self.forms.clone())
            }
            Ok(_) => {
                tracing::debug!(department = %self.department, "Remote form list empty, using defaults");
                self.use_defaults();
                Outcome::fallback(self.forms.clone(), Degradation::RemoteEmpty)
            }
            Err(e) => {
                tracing::warn!(department = %self.department, error = %e, "Failed to fetch form list, using defaults");
                self.use_defaults();
                Outcome::fallback(self.forms.clone(), Degradation::Remote(e.to_string()))
            }
        }
    }

    /// Move a form; `to == None` is a cancelled drag
    ///
    /// Returns `None` when nothing moved.
    pub fn reorder(&mut self, from: usize, to: Option<usize>) -> Option<Persisted> {
        if !reorder(&mut self.forms, from, to) {
            return None;
        }
        Some(self.persist(&self.forms))
    }

    /// Prepend a form unless one with the same name is already listed
    pub fn insert_form(&mut self, form: FormDescriptor) -> Option<Persisted> {
        if self.forms.iter().any(|f| f.name == form.name) {
            return None;
        }
        self.new_names.insert(form.name.clone());
        self.forms.insert(0, form);
        Some(self.persist(&self.forms))
    }

    pub fn reset_to_default(&mut self) -> Persisted {
        self.use_defaults();
        self.persist(&self.forms)
    }

    fn use_defaults(&mut self) {
        self.forms = self.defaults.clone();
        self.new_names.clear();
    }

    /// Mirror `forms` to the local cache and start the remote write
    pub fn persist(&self, forms: &[FormDescriptor]) -> Persisted {
        let remote = self.spawn_remote_write(forms.to_vec());
        let local = self.write_cache(forms);
        Persisted { local, remote }
    }

    fn spawn_remote_write(&self, forms: Vec<FormDescriptor>) -> RemoteWrite {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::warn!(department = %self.department, error = %e, "No runtime, remote form write dropped");
                return RemoteWrite::Dropped(Degradation::Remote(e.to_string()));
            }
        };

        let remote = Arc::clone(&self.remote);
        let department = self.department;
        RemoteWrite::InFlight(runtime.spawn(async move {
            match remote.store_forms(department, forms).await {
                Ok(_) => {
                    tracing::debug!(department = %department, "Form list saved remotely");
                    WriteOutcome::Written
                }
                Err(e) => {
                    tracing::warn!(department = %department, error = %e, "Failed to save form list remotely");
                    WriteOutcome::Dropped(Degradation::Remote(e.to_string()))
                }
            }
        }))
    }

    fn write_cache(&self, forms: &[FormDescriptor]) -> WriteOutcome {
        let json = match serde_json::to_string(forms) {
            Ok(json) => json,
            Err(e) => return WriteOutcome::Dropped(Degradation::Corrupt(e.to_string())),
        };
        match self.cache.set_item(&self.department.form_cache_key(), &json) {
            Ok(()) => WriteOutcome::Written,
            Err(e) => {
                tracing::warn!(department = %self.department, error = %e, "Failed to cache form list");
                WriteOutcome::Dropped(Degradation::Storage(e.to_string()))
            }
        }
    }

    /// List last mirrored to the local cache
    pub fn cached_forms(&self) -> Outcome<Vec<FormDescriptor>> {
        match self.cache.get_item(&self.department.form_cache_key()) {
            Ok(Some(raw)) if !raw.trim().is_empty() => {
                match serde_json::from_str::<Vec<FormDescriptor>>(&raw) {
                    Ok(forms) => Outcome::Fresh(forms),
                    Err(e) => Outcome::fallback(
                        self.defaults.clone(),
                        Degradation::Corrupt(e.to_string()),
                    ),
                }
            }
            Ok(_) => Outcome::fallback(self.defaults.clone(), Degradation::Empty),
            Err(e) => {
                Outcome::fallback(self.defaults.clone(), Degradation::Storage(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::{ClientError, ClientResult};
    use async_trait::async_trait;

    struct Unreachable;

    #[async_trait]
    impl RemoteFormStore for Unreachable {
        async fn fetch_forms(&self, _: Department) -> ClientResult<Vec<FormDescriptor>> {
            Err(ClientError::Internal("offline".into()))
        }

        async fn store_forms(
            &self,
            _: Department,
            _: Vec<FormDescriptor>,
        ) -> ClientResult<Vec<FormDescriptor>> {
            Err(ClientError::Internal("offline".into()))
        }
    }

    fn sync(cache: Arc<MemoryStorage>) -> FormListSynchronizer {
        FormListSynchronizer::new(Department::Printing, Arc::new(Unreachable), cache)
    }

    #[test]
    fn test_persist_without_runtime_still_caches() {
        let cache = Arc::new(MemoryStorage::new());
        let mut sync = sync(cache.clone());

        let persisted = sync.reorder(0, Some(1)).unwrap();

        assert_eq!(persisted.local, WriteOutcome::Written);
        assert!(matches!(persisted.remote, RemoteWrite::Dropped(_)));
        assert_eq!(sync.cached_forms(), Outcome::Fresh(sync.forms().to_vec()));
    }

    #[test]
    fn test_cached_forms_empty_falls_back() {
        let sync = sync(Arc::new(MemoryStorage::new()));
        let cached = sync.cached_forms();
        assert_eq!(cached.reason(), Some(&Degradation::Empty));
        assert_eq!(cached.value().as_slice(), sync.defaults());
    }

    #[tokio::test]
    async fn test_remote_failure_is_reported_not_raised() {
        let cache = Arc::new(MemoryStorage::new());
        let sync = sync(cache);

        let persisted = sync.persist(sync.forms());

        assert!(persisted.local.is_written());
        assert!(matches!(
            persisted.remote.settled().await,
            WriteOutcome::Dropped(Degradation::Remote(_))
        ));
    }
}
