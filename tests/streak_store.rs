// tests/streak_store.rs
use std::fs;
use std::path::PathBuf;

use polidle::store::{FileStore, StreakStore};

/// Fresh scratch dir per test under the target dir.
fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn missing_file_reads_zero() {
    let store = FileStore::new(scratch("store_missing").join("state.txt"));
    assert_eq!(store.load(), 0);
}

#[test]
fn save_creates_dirs_and_round_trips() {
    let path = scratch("store_roundtrip").join("nested").join("state.txt");
    let mut store = FileStore::new(&path);
    store.save(7).unwrap();
    assert_eq!(store.load(), 7);
    assert_eq!(FileStore::new(&path).load(), 7);
}

#[test]
fn corrupt_value_reads_zero_and_other_keys_survive() {
    let dir = scratch("store_corrupt");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("state.txt");
    fs::write(&path, "theme=dark\npolidle.best_streak=lots\n").unwrap();

    let mut store = FileStore::new(&path);
    assert_eq!(store.load(), 0);

    store.save(3).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("theme=dark"));
    assert!(text.contains("polidle.best_streak=3"));
    assert_eq!(store.load(), 3);
}
