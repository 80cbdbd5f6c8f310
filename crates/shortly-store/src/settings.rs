use typed_builder::TypedBuilder;

/// Key the collection is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "shortenedUrls";

/// What [`MappingStore::load`](crate::MappingStore::load) does when the
/// stored value cannot be decoded.
///
/// Stored records are held to the same URL rules as new input, which are
/// stricter than what the browser version accepted: a saved `longUrl`
/// without an authority, such as `https:example.com` or
/// `mailto:a@b.c`, makes the whole value count as corrupt.
///
/// Either policy only applies to the first load. Reloading a store that
/// already holds a collection reports corrupt data and keeps that
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptDataPolicy {
    /// Report [`LoadError::CorruptPersistedData`](crate::LoadError) and stay
    /// in the previous state. The stored value is left untouched.
    #[default]
    Fail,
    /// Log a warning and start from an empty collection. The corrupt value
    /// is overwritten by the next successful add.
    Reset,
}

/// Configures a [`MappingStore`](crate::MappingStore).
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct StoreSettings {
    #[builder(default = DEFAULT_STORAGE_KEY.to_string(), setter(into))]
    pub storage_key: String,
    #[builder(default)]
    pub corrupt_data_policy: CorruptDataPolicy,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
