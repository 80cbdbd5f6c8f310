use crate::codec;
use crate::error::{LoadError, PersistError, StoreError};
use crate::settings::{CorruptDataPolicy, StoreSettings};
use crate::validate::validate_url;
use shortly_core::{KeyValueStorage, MappingCollection, Record};
use shortly_generator::Generator;
use tracing::{debug, error, info, warn};

/// Lifecycle state of a [`MappingStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Created but not yet loaded from storage.
    Uninitialized,
    /// Loaded; accepts validation and additions.
    Ready,
}

/// Owns the mapping collection and keeps it in sync with durable storage.
///
/// The store is created [`Uninitialized`](StoreState::Uninitialized) and
/// becomes [`Ready`](StoreState::Ready) after a successful [`load`].
/// Every mutation writes the full collection back to storage before
/// returning. A failed write never rolls back the in-memory change, and
/// the store refuses to reload until a later write has saved it.
///
/// Note: aliases come straight from the `Generator`. Collisions with
/// existing aliases are not checked.
///
/// [`load`]: MappingStore::load
#[derive(Debug)]
pub struct MappingStore<S, G> {
    storage: S,
    generator: G,
    settings: StoreSettings,
    collection: Option<MappingCollection>,
    /// Set while the in-memory collection holds records storage lacks.
    unsaved: bool,
}

impl<S: KeyValueStorage, G: Generator> MappingStore<S, G> {
    /// Creates a store with default settings.
    pub fn new(storage: S, generator: G) -> Self {
        Self::with_settings(storage, generator, StoreSettings::default())
    }

    pub fn with_settings(storage: S, generator: G, settings: StoreSettings) -> Self {
        Self {
            storage,
            generator,
            settings,
            collection: None,
            unsaved: false,
        }
    }

    pub fn state(&self) -> StoreState {
        match self.collection {
            Some(_) => StoreState::Ready,
            None => StoreState::Uninitialized,
        }
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Reads the persisted collection and makes the store ready.
    ///
    /// A missing value yields an empty collection. Undecodable data is
    /// handled according to [`StoreSettings::corrupt_data_policy`] on the
    /// first load only; a ready store always keeps its collection and
    /// reports [`LoadError::CorruptPersistedData`].
    ///
    /// Calling `load` again on a ready store re-reads storage, unless a
    /// failed write left records that only exist in memory. In that case
    /// [`LoadError::UnsavedChanges`] is returned and nothing is replaced.
    pub fn load(&mut self) -> Result<&MappingCollection, LoadError> {
        let key = self.settings.storage_key.as_str();
        let reloading = self.collection.is_some();

        if self.unsaved {
            let records = self.collection.as_ref().map_or(0, MappingCollection::len);
            warn!(key, records, "refusing to reload over unsaved mappings");
            return Err(LoadError::UnsavedChanges { records });
        }

        let collection = match self.storage.read(key)? {
            None => {
                debug!(key, "no persisted mappings, starting empty");
                MappingCollection::new()
            }
            Some(raw) => match codec::decode(&raw) {
                Ok(collection) => collection,
                Err(e)
                    if reloading
                        || self.settings.corrupt_data_policy == CorruptDataPolicy::Fail =>
                {
                    error!(key, error = %e, "persisted mappings are corrupt");
                    return Err(LoadError::CorruptPersistedData(e));
                }
                Err(e) => {
                    warn!(key, error = %e, "discarding corrupt persisted mappings");
                    MappingCollection::new()
                }
            },
        };

        info!(key, records = collection.len(), "loaded mappings");
        Ok(&*self.collection.insert(collection))
    }

    /// The in-memory collection, newest first.
    pub fn current_collection(&self) -> Result<&MappingCollection, StoreError> {
        self.collection.as_ref().ok_or(StoreError::NotLoaded)
    }

    /// Validates a candidate URL and returns it trimmed.
    ///
    /// See [`validate_url`] for the rules; this method additionally
    /// requires the store to be loaded.
    pub fn validate<'a>(&self, candidate: &'a str) -> Result<&'a str, StoreError> {
        if self.collection.is_none() {
            return Err(StoreError::NotLoaded);
        }
        Ok(validate_url(candidate)?)
    }

    /// Shortens `candidate` and returns the new record.
    ///
    /// Invalid input leaves both memory and storage untouched. Once the
    /// input is valid the record is prepended in memory; if the following
    /// write fails, the record stays in memory and is handed back inside
    /// [`StoreError::Persist`].
    pub fn add(&mut self, candidate: &str) -> Result<Record, StoreError> {
        let Some(collection) = self.collection.as_mut() else {
            return Err(StoreError::NotLoaded);
        };
        let url = validate_url(candidate)?;

        let record = Record::new(url, self.generator.generate());
        collection.prepend(record.clone());
        info!(alias = %record.alias(), records = collection.len(), "added mapping");

        let persisted = Self::persist(&self.storage, &self.settings.storage_key, collection);
        self.unsaved = persisted.is_err();
        if let Err(source) = persisted {
            warn!(alias = %record.alias(), error = %source, "failed to persist mappings");
            return Err(StoreError::Persist { record, source });
        }

        Ok(record)
    }

    fn persist(
        storage: &S,
        key: &str,
        collection: &MappingCollection,
    ) -> Result<(), PersistError> {
        let encoded = codec::encode(collection)?;
        storage.write(key, &encoded)?;
        debug!(
            key,
            records = collection.len(),
            bytes = encoded.len(),
            "persisted mappings"
        );
        Ok(())
    }
}
