// src/config/options.rs
use crate::core::location::Location;
use crate::error::GameError;
use crate::model::ChamberFilter;

use super::consts::*;

/// Where the two chamber datasets and the photos live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataSources {
    pub deputes: Location,
    pub senateurs: Location,
    /// Relative photo references are resolved against this.
    pub root: Location,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            deputes: Location::File(DEFAULT_DEPUTES.into()),
            senateurs: Location::File(DEFAULT_SENATEURS.into()),
            root: Location::File(DEFAULT_ROOT.into()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GameOptions {
    pub sources: DataSources,
    pub filter: ChamberFilter,
    /// Fixed shuffle seed; fresh entropy when `None`.
    pub seed: Option<u64>,
}

impl GameOptions {
    pub fn set_source(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        let loc = Location::parse(value)?;
        match key {
            "deputes" => self.sources.deputes = loc,
            "senateurs" => self.sources.senateurs = loc,
            "root" => self.sources.root = loc,
            other => return Err(GameError::InvalidOption(format!("unknown source key: {other}"))),
        }
        Ok(())
    }

    pub fn set_mode(&mut self, value: &str) -> Result<(), GameError> {
        self.filter = ChamberFilter::parse(value)
            .ok_or_else(|| GameError::InvalidOption(format!("unknown mode: {value}")))?;
        Ok(())
    }
}
