use std::io::Write;

use subcandidates_engine::{CandidateEntry, ConversionService, TableConversion};
use tempfile::NamedTempFile;

const SAMPLE: &str = "\
# reading\tcandidates
nihon\t日本{2:ニッポン|にっぽん}\tにほん\tニホン
kyou\t今日\t京

broken
kyou\t恭
";

#[test]
fn test_from_tsv_str_keeps_service_order() {
    let table = TableConversion::from_tsv_str(SAMPLE);
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.convert("nihon").unwrap(),
        vec!["日本{2:ニッポン|にっぽん}", "にほん", "ニホン"]
    );
}

#[test]
fn test_repeated_reading_appends() {
    let table = TableConversion::from_tsv_str(SAMPLE);
    assert_eq!(table.convert("kyou").unwrap(), vec!["今日", "京", "恭"]);
}

#[test]
fn test_unknown_reading_is_empty_not_error() {
    let table = TableConversion::from_tsv_str(SAMPLE);
    assert!(table.convert("xyz").unwrap().is_empty());
    assert!(table.convert("broken").unwrap().is_empty());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", SAMPLE).unwrap();

    let table = TableConversion::load(file.path()).unwrap();
    let first = table.convert("nihon").unwrap().remove(0);
    let entry = CandidateEntry::parse(&first).unwrap();
    assert_eq!(entry.text, "日本");
    assert_eq!(entry.sub_candidates.unwrap().anchor, "2");
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(TableConversion::load(&dir.path().join("missing.tsv")).is_err());
}

#[test]
fn test_builder_entries() {
    let table = TableConversion::new()
        .with_entry("a", ["あ"])
        .with_entry("a", ["ア"]);
    assert_eq!(table.convert("a").unwrap(), vec!["あ", "ア"]);
}
