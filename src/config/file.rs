// src/config/file.rs
//
// `key=value` config file. Missing or unreadable file → defaults.
// Bad values are logged and skipped; they never abort startup.

use std::{fs, path::Path};

use super::options::GameOptions;

pub fn load(path: &Path) -> GameOptions {
    let mut opts = GameOptions::default();
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            logd!("Config: {} not read ({}), using defaults", path.display(), e);
            return opts;
        }
    };
    apply(&mut opts, &text);
    logf!("Config: Loaded {}", path.display());
    opts
}

/// Apply every recognised line of `text` on top of `opts`.
pub fn apply(opts: &mut GameOptions, text: &str) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else {
            logw!("Config: Ignoring line without '=': {}", line);
            continue;
        };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();

        let res = match key {
            "deputes" | "senateurs" | "root" => opts.set_source(key, val),
            "mode" => opts.set_mode(val),
            "seed" => match val.parse::<u64>() {
                Ok(seed) => { opts.seed = Some(seed); Ok(()) }
                Err(e) => Err(crate::error::GameError::InvalidOption(format!("seed: {e}"))),
            },
            _ => { logd!("Config: Unknown key {}", key); Ok(()) }
        };
        if let Err(e) = res {
            logw!("Config: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::location::Location;
    use crate::model::ChamberFilter;

    #[test]
    fn keys_override_defaults() {
        let mut opts = GameOptions::default();
        apply(&mut opts, "
            # comment
            deputes = http://example.org/data/deputes.json
            mode=senateurs
            seed=42
            colour=blue
        ");
        assert_eq!(
            opts.sources.deputes,
            Location::Http { host: s!("example.org"), port: 80, path: s!("/data/deputes.json") }
        );
        assert_eq!(opts.filter, ChamberFilter::UpperHouseOnly);
        assert_eq!(opts.seed, Some(42));
    }

    #[test]
    fn bad_values_are_skipped() {
        let mut opts = GameOptions::default();
        apply(&mut opts, "mode=parliament\nseed=abc\nroot=https://secure.example/");
        assert_eq!(opts, GameOptions::default());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let opts = load(Path::new("definitely/not/here.cfg"));
        assert_eq!(opts, GameOptions::default());
    }
}
