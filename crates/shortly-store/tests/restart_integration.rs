use shortly_generator::{RandomGenerator, SeqGenerator};
use shortly_storage::FileStorage;
use shortly_store::{
    codec, CorruptDataPolicy, KeyValueStorage, LoadError, MappingStore, Record, StoreError,
    StoreSettings, ValidationError,
};
use tempfile::TempDir;

const KEY: &str = "shortenedUrls";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    fn storage(&self) -> FileStorage {
        FileStorage::open(self.dir.path()).expect("open file storage")
    }

    fn store(&self) -> MappingStore<FileStorage, RandomGenerator> {
        let mut store = MappingStore::new(self.storage(), RandomGenerator::new());
        store.load().expect("load store");
        store
    }
}

fn original_urls(records: &[Record]) -> Vec<&str> {
    records.iter().map(Record::original_url).collect()
}

#[test]
fn records_survive_restart_newest_first() {
    let fixture = Fixture::new();

    let (a, b) = {
        let mut store = fixture.store();
        let a = store.add("https://a.com").unwrap();
        let b = store.add("https://b.com").unwrap();
        (a, b)
    };

    let restarted = fixture.store();
    let collection = restarted.current_collection().unwrap();

    assert_eq!(collection.len(), 2);
    assert_eq!(collection.as_slice(), [b, a]);
    assert_eq!(
        original_urls(collection.as_slice()),
        ["https://b.com", "https://a.com"]
    );
}

#[test]
fn persisted_value_matches_in_memory_collection() {
    let fixture = Fixture::new();
    let mut store = fixture.store();
    for url in ["https://a.com", "https://b.com/path?q=1", "http://c.org:8080/#x"] {
        store.add(url).unwrap();
    }

    let raw = fixture.storage().read(KEY).unwrap().unwrap();

    assert_eq!(&codec::decode(&raw).unwrap(), store.current_collection().unwrap());
    assert_eq!(raw, codec::encode(store.current_collection().unwrap()).unwrap());
}

#[test]
fn rejected_input_changes_nothing_on_disk() {
    let fixture = Fixture::new();
    let mut store = fixture.store();
    store.add("https://a.com").unwrap();
    let before = fixture.storage().read(KEY).unwrap();

    assert_eq!(
        store.add(""),
        Err(StoreError::Validation(ValidationError::EmptyInput))
    );
    assert!(matches!(
        store.add("ftp:/bad"),
        Err(StoreError::Validation(ValidationError::MalformedUrl { .. }))
    ));

    assert_eq!(store.current_collection().unwrap().len(), 1);
    assert_eq!(fixture.storage().read(KEY).unwrap(), before);
}

#[test]
fn reads_data_in_the_browser_storage_format() {
    let fixture = Fixture::new();
    fixture
        .storage()
        .write(
            KEY,
            r#"[{"longUrl":"https://example.com/second","shortUrl":"short.ly/4fzyo8"},{"longUrl":"https://example.com/first","shortUrl":"short.ly/k3x9qa"}]"#,
        )
        .unwrap();

    let mut store = MappingStore::new(fixture.storage(), SeqGenerator::new());
    let collection = store.load().unwrap();

    assert_eq!(
        original_urls(collection.as_slice()),
        ["https://example.com/second", "https://example.com/first"]
    );
    assert_eq!(collection.get(1).unwrap().alias().as_str(), "short.ly/k3x9qa");
}

#[test]
fn corrupt_file_is_reported_and_left_alone() {
    let fixture = Fixture::new();
    fixture.storage().write(KEY, "[{\"longUrl\":").unwrap();

    let mut store = MappingStore::new(fixture.storage(), RandomGenerator::new());

    assert!(matches!(
        store.load(),
        Err(LoadError::CorruptPersistedData(_))
    ));
    assert_eq!(
        fixture.storage().read(KEY).unwrap().as_deref(),
        Some("[{\"longUrl\":")
    );
}

#[test]
fn corrupt_file_is_replaced_after_reset() {
    let fixture = Fixture::new();
    fixture.storage().write(KEY, "not json at all").unwrap();

    let settings = StoreSettings::builder()
        .corrupt_data_policy(CorruptDataPolicy::Reset)
        .build();
    let mut store = MappingStore::with_settings(fixture.storage(), SeqGenerator::new(), settings);
    assert!(store.load().unwrap().is_empty());
    store.add("https://a.com").unwrap();

    let restarted = fixture.store();
    assert_eq!(
        original_urls(restarted.current_collection().unwrap().as_slice()),
        ["https://a.com"]
    );
}

#[test]
fn browser_records_without_authority_count_as_corrupt() {
    let fixture = Fixture::new();
    let raw = r#"[{"longUrl":"https:example.com","shortUrl":"short.ly/4fzyo8"}]"#;
    fixture.storage().write(KEY, raw).unwrap();

    let mut store = MappingStore::new(fixture.storage(), RandomGenerator::new());

    assert!(matches!(
        store.load(),
        Err(LoadError::CorruptPersistedData(_))
    ));
    assert_eq!(fixture.storage().read(KEY).unwrap().as_deref(), Some(raw));
}

#[test]
fn seq_generator_resumes_after_saved_aliases() {
    let fixture = Fixture::new();
    {
        let mut store = MappingStore::new(fixture.storage(), SeqGenerator::new());
        store.load().unwrap();
        store.add("https://a.com").unwrap();
        store.add("https://b.com").unwrap();
    }

    let mut store = MappingStore::new(fixture.storage(), SeqGenerator::new());
    let saved = store.load().unwrap().len();
    store.generator().advance_to(saved as u64);
    let record = store.add("https://c.com").unwrap();

    assert_eq!(record.alias().as_str(), "short.ly/000002");
    let aliases: Vec<&str> = store
        .current_collection()
        .unwrap()
        .iter()
        .map(|r| r.alias().as_str())
        .collect();
    assert_eq!(aliases, ["short.ly/000002", "short.ly/000001", "short.ly/000000"]);
}
