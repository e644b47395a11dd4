// src/store.rs
//
// Durable state: the best streak, and nothing else.
// Stored as `key=value` lines so the file stays hand-editable.

use std::{
    cell::Cell,
    fs, io,
    path::{Path, PathBuf},
    rc::Rc,
};

use crate::config::consts::{BEST_STREAK_KEY, STORE_FILE};

pub trait StreakStore {
    /// Stored best streak. Missing or unreadable → 0, never an error.
    fn load(&self) -> u32;
    fn save(&mut self, best: u32) -> io::Result<()>;
}

pub struct FileStore {
    path: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), key: s!(BEST_STREAK_KEY) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(STORE_FILE)
    }
}

impl StreakStore for FileStore {
    fn load(&self) -> u32 {
        let Ok(text) = fs::read_to_string(&self.path) else {
            logd!("Store: {} not readable, best streak = 0", self.path.display());
            return 0;
        };
        match read_value(&text, &self.key).map(str::parse::<u32>) {
            Some(Ok(v)) => v,
            Some(Err(e)) => {
                logw!("Store: Corrupt {} ({}), best streak = 0", self.key, e);
                0
            }
            None => 0,
        }
    }

    fn save(&mut self, best: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let old = fs::read_to_string(&self.path).unwrap_or_default();
        fs::write(&self.path, write_value(&old, &self.key, &best.to_string()))
    }
}

fn read_value<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    text.lines().find_map(|line| {
        let (k, v) = line.split_once('=')?;
        (k.trim() == key).then(|| v.trim())
    })
}

/// Replace `key`'s line in `text` (or append one), keeping other lines.
fn write_value(text: &str, key: &str, value: &str) -> String {
    let mut out = s!();
    let mut found = false;
    for line in text.lines() {
        let is_key = line.split_once('=').map(|(k, _)| k.trim() == key).unwrap_or(false);
        if is_key {
            if !found {
                out.push_str(&format!("{key}={value}\n"));
                found = true;
            }
        } else if !line.trim().is_empty() {
            out.push_str(line);
            out.push('\n');
        }
    }
    if !found {
        out.push_str(&format!("{key}={value}\n"));
    }
    out
}

/// In-memory store. Clones share the value, so a test can keep a handle
/// while the session owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Rc<Cell<u32>>,
    writes: Rc<Cell<u32>>,
}

impl MemoryStore {
    pub fn with_value(best: u32) -> Self {
        let store = Self::default();
        store.value.set(best);
        store
    }

    pub fn value(&self) -> u32 {
        self.value.get()
    }

    /// How many times `save` ran.
    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

impl StreakStore for MemoryStore {
    fn load(&self) -> u32 {
        self.value.get()
    }

    fn save(&mut self, best: u32) -> io::Result<()> {
        self.value.set(best);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_lookup_ignores_other_keys() {
        let text = "other=7\npolidle.best_streak = 12\n";
        assert_eq!(read_value(text, "polidle.best_streak"), Some("12"));
        assert_eq!(read_value(text, "missing"), None);
    }

    #[test]
    fn rewrite_keeps_other_lines() {
        let text = "other=7\npolidle.best_streak=3\n";
        assert_eq!(
            write_value(text, "polidle.best_streak", "4"),
            "other=7\npolidle.best_streak=4\n"
        );
        assert_eq!(write_value("", "k", "1"), "k=1\n");
    }
}
