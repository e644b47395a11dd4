// src/model.rs
use std::fmt;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum Chamber {
    #[serde(rename = "depute", alias = "lower")]
    LowerHouse,
    #[serde(rename = "senateur", alias = "upper")]
    UpperHouse,
}

impl Chamber {
    pub fn label(self) -> &'static str {
        match self {
            Chamber::LowerHouse => "Député·e",
            Chamber::UpperHouse => "Sénateur·rice",
        }
    }

    pub fn house(self) -> &'static str {
        match self {
            Chamber::LowerHouse => "Assemblée nationale",
            Chamber::UpperHouse => "Sénat",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One parliamentarian, as shown in a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoliticianRecord {
    /// Producer slug, if any. Only used in logs.
    pub id: String,
    pub full_name: String,
    pub chamber: Chamber,
    pub group_code: String,
    pub group_name: String,
    pub photo: String,
}

impl PoliticianRecord {
    pub fn new(full_name: &str, chamber: Chamber, group_code: &str, group_name: &str, photo: &str) -> Self {
        Self {
            id: s!(),
            full_name: s!(full_name),
            chamber,
            group_code: s!(group_code),
            group_name: s!(group_name),
            photo: s!(photo),
        }
    }

    pub fn has_photo(&self) -> bool {
        !self.photo.trim().is_empty()
    }

    /// A record can be played only with both a photo and a group to guess.
    pub fn is_playable(&self) -> bool {
        self.has_photo() && !self.group_code.trim().is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChamberFilter {
    #[default]
    AllChambers,
    LowerHouseOnly,
    UpperHouseOnly,
}

impl ChamberFilter {
    pub const ALL: [ChamberFilter; 3] = [
        ChamberFilter::AllChambers,
        ChamberFilter::LowerHouseOnly,
        ChamberFilter::UpperHouseOnly,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "tous" => Some(ChamberFilter::AllChambers),
            "deputes" | "an" | "lower" => Some(ChamberFilter::LowerHouseOnly),
            "senateurs" | "senat" | "upper" => Some(ChamberFilter::UpperHouseOnly),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChamberFilter::AllChambers => "Tous",
            ChamberFilter::LowerHouseOnly => "Assemblée",
            ChamberFilter::UpperHouseOnly => "Sénat",
        }
    }

    pub fn includes(self, chamber: Chamber) -> bool {
        match self {
            ChamberFilter::AllChambers => true,
            ChamberFilter::LowerHouseOnly => chamber == Chamber::LowerHouse,
            ChamberFilter::UpperHouseOnly => chamber == Chamber::UpperHouse,
        }
    }
}
