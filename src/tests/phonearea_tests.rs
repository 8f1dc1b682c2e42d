use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::{
    errors::{LoadError, MalformedReason, QueryError, StoreError},
    generate_db, load_records, Area, AreaField, KeyValueStore, MemoryStore, PhoneArea,
};

static ONCE: std::sync::Once = std::sync::Once::new();

fn init_logger() {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}

fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/phonenum_sample.txt")
}

fn open_sample(tmp: &TempDir) -> PhoneArea {
    init_logger();
    PhoneArea::open(sample_path(), tmp.path().join("data")).expect("sample should load")
}

#[test]
fn query_before_init() {
    init_logger();
    let tmp = TempDir::new().unwrap();
    let areas = PhoneArea::new(sample_path(), tmp.path().join("data"));

    assert!(!areas.is_initialized());
    assert!(!areas.is_store_present());
    assert!(matches!(
        areas.query("13761921111"),
        Err(QueryError::NotInitialized)
    ));
}

#[test]
fn query_shanghai_numbers() {
    let tmp = TempDir::new().unwrap();
    let areas = open_sample(&tmp);
    assert!(areas.is_initialized());
    assert!(areas.is_store_present());

    for number in ["13761921111", "13564387521", "18616832345", "+86 186 1683 2345"] {
        let area = areas.query(number).unwrap();
        assert_eq!(area.province, "上海", "{}", number);
        assert_eq!(area.city, "上海", "{}", number);
        assert_eq!(area.area_code, "021", "{}", number);
    }
}

#[test]
fn query_returns_every_field() {
    let tmp = TempDir::new().unwrap();
    let areas = open_sample(&tmp);

    let area = areas.query("13300001234").unwrap();
    assert_eq!(
        area,
        Area {
            id: 2,
            phone_prefix: "1330000".to_owned(),
            province: "广西".to_owned(),
            city: "南宁市".to_owned(),
            model: "中国电信 CDMA".to_owned(),
            post_code: "530000".to_owned(),
            area_code: "0771".to_owned(),
        }
    );

    // every accepted spelling resolves to the same record
    for number in ["8613300001234", "08613300001234", "+8613300001234", "133 0000 1234"] {
        assert_eq!(areas.query(number).unwrap(), area, "{}", number);
    }
}

#[test]
fn query_rejects_invalid_numbers() {
    let tmp = TempDir::new().unwrap();
    let areas = open_sample(&tmp);

    for number in ["12345", "19712345678", "0013761921111", "phone number"] {
        match areas.query(number) {
            Err(QueryError::InvalidFormat { input }) => assert_eq!(input, number),
            other => panic!("unexpected result for {}: {:?}", number, other),
        }
    }
}

#[test]
fn query_unknown_prefix() {
    let tmp = TempDir::new().unwrap();
    let areas = open_sample(&tmp);

    match areas.query("13800138000") {
        Err(QueryError::PrefixNotFound { prefix }) => assert_eq!(prefix, "1380013"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn init_opens_existing_store_without_source() {
    let tmp = TempDir::new().unwrap();
    let store_dir = tmp.path().join("data");
    {
        let areas = open_sample(&tmp);
        assert_eq!(areas.query("13900101234").unwrap().city, "北京");
    }

    // the source is not read again once the store directory exists
    let mut areas = PhoneArea::new(tmp.path().join("missing.txt"), &store_dir);
    assert_eq!(areas.source_path(), tmp.path().join("missing.txt"));
    assert_eq!(areas.store_path(), store_dir);
    assert!(areas.store().is_none());
    assert!(areas.is_store_present());
    areas.init().unwrap();
    assert!(areas.store().is_some());
    let area = areas.query("13900101234").unwrap();
    assert_eq!(area.id, 5);
    assert_eq!(area.area_code, "010");
}

#[test]
fn init_fails_on_missing_source() {
    init_logger();
    let tmp = TempDir::new().unwrap();
    let mut areas = PhoneArea::new(tmp.path().join("missing.txt"), tmp.path().join("data"));

    assert!(matches!(areas.init(), Err(LoadError::Io(_))));
    assert!(!areas.is_initialized());
    // the store is only created once the source could be opened
    assert!(!areas.is_store_present());
}

#[test]
fn init_aborts_on_malformed_line() {
    init_logger();
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("phonenum.txt");
    fs::write(
        &source,
        "1,\"1330000\",\"广西 南宁市\",\"中国电信 CDMA\",\"0771\",\"530000\"\n\
         2,\"1376192\",\"上海\",\"021\",\"200000\"\n\
         3,\"1390010\",\"北京\",\"中国移动 GSM\",\"010\",\"100000\"\n",
    )
    .unwrap();
    let store_dir = tmp.path().join("data");

    let mut areas = PhoneArea::new(&source, &store_dir);
    match areas.init() {
        Err(LoadError::MalformedRecord(err)) => {
            assert_eq!(err.line_number, 2);
            assert_eq!(err.reason, MalformedReason::FieldCount(5));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!areas.is_initialized());

    // the partial store is left behind and trusted by the next init
    assert!(areas.is_store_present());
    areas.init().unwrap();
    assert_eq!(areas.query("13300001234").unwrap().city, "南宁市");
    assert!(matches!(
        areas.query("13761921111"),
        Err(QueryError::PrefixNotFound { .. })
    ));
    match areas.query("13900101234") {
        Err(QueryError::PrefixNotFound { prefix }) => assert_eq!(prefix, "1390010"),
        other => panic!("unexpected result: {:?}", other),
    }

    // only the first line took an identifier
    let store = areas.store().unwrap();
    assert_eq!(store.get(b"prefix_incr").unwrap(), b"1");
    assert!(matches!(
        store.get(b"p:1390010"),
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(store.get(b"pv:2"), Err(StoreError::NotFound { .. })));
}

#[test]
fn generate_db_twice_reassigns_identifiers() {
    init_logger();
    let tmp = TempDir::new().unwrap();
    let store_dir = tmp.path().join("data");

    drop(generate_db(sample_path(), &store_dir).unwrap());
    let store = generate_db(sample_path(), &store_dir).unwrap();
    assert_eq!(store.dir(), store_dir);
    assert_eq!(store.get(b"prefix_incr").unwrap(), b"14");

    let areas = PhoneArea::with_store(store);
    let area = areas.query("13300001234").unwrap();
    assert_eq!(area.id, 9);
    assert_eq!(area.city, "南宁市");
}

#[test]
fn memory_store_backed_queries() {
    init_logger();
    let store = MemoryStore::new();
    let source = "1,\"1851234\",\"上海\",\"中国联通 GSM\",\"021\",\"200000\"\n";
    assert_eq!(load_records(Cursor::new(source), &store).unwrap(), 1);

    let areas = PhoneArea::with_store(store);
    assert!(areas.is_initialized());
    assert!(!areas.is_store_present());

    let area = areas.query("18512345678").unwrap();
    assert_eq!(area.province, "上海");
    assert_eq!(area.city, "上海");
    assert_eq!(area.model, "中国联通 GSM");
    assert_eq!(area.post_code, "200000");
}

#[test]
fn partially_written_record_is_reported() {
    init_logger();
    let store = MemoryStore::new();
    store.set(b"p:1330000", &3u64.to_le_bytes()).unwrap();
    store.set(b"pv:3", "广西".as_bytes()).unwrap();
    store.set(b"ct:3", "南宁市".as_bytes()).unwrap();

    let areas = PhoneArea::with_store(store);
    match areas.query("13300001234") {
        Err(QueryError::FieldNotFound { field, id }) => {
            assert_eq!(field, AreaField::Model);
            assert_eq!(id, 3);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn corrupt_identifier_is_reported() {
    init_logger();
    let store = MemoryStore::new();
    store.set(b"p:1330000", b"3").unwrap();

    let areas = PhoneArea::with_store(store);
    assert!(matches!(
        areas.query("13300001234"),
        Err(QueryError::Store(StoreError::CorruptValue { key })) if key == "p:1330000"
    ));
}
