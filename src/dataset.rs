// src/dataset.rs
//
// Loads the two chamber datasets the game plays from.
//
// Both resources are fetched at once. If either fails, the failed one gets one
// more attempt on its own so a broken source never blocks the other. Records
// without a photo are dropped here; records without a group are dropped when the
// play pool is built. Only "nothing at all from either side" is an error.

use std::{collections::HashMap, thread};

use serde::Deserialize;
use serde_json::Value;

use crate::{
    config::options::DataSources,
    core::location::{Fetch, Location},
    error::GameError,
    model::{Chamber, ChamberFilter, PoliticianRecord},
    progress::Progress,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub deputes: Vec<PoliticianRecord>,
    pub senateurs: Vec<PoliticianRecord>,
}

impl Dataset {
    pub fn new(deputes: Vec<PoliticianRecord>, senateurs: Vec<PoliticianRecord>) -> Self {
        Self { deputes, senateurs }
    }

    pub fn is_empty(&self) -> bool {
        self.deputes.is_empty() && self.senateurs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.deputes.len() + self.senateurs.len()
    }

    pub fn chamber(&self, chamber: Chamber) -> &[PoliticianRecord] {
        match chamber {
            Chamber::LowerHouse => &self.deputes,
            Chamber::UpperHouse => &self.senateurs,
        }
    }

    /// Fresh copy of the records `filter` selects, deputies first.
    pub fn select(&self, filter: ChamberFilter) -> Vec<PoliticianRecord> {
        match filter {
            ChamberFilter::AllChambers => {
                let mut all = Vec::with_capacity(self.len());
                all.extend_from_slice(&self.deputes);
                all.extend_from_slice(&self.senateurs);
                all
            }
            ChamberFilter::LowerHouseOnly => self.deputes.clone(),
            ChamberFilter::UpperHouseOnly => self.senateurs.clone(),
        }
    }
}

/// Record shape written by the data producer. English aliases accepted.
#[derive(Deserialize)]
struct RawRecord {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default, alias = "fullName", alias = "full_name")]
    nom_complet: Option<String>,
    #[serde(default)]
    nom: Option<String>,
    #[serde(default)]
    prenom: Option<String>,
    #[serde(default, rename = "type", alias = "chamber")]
    chamber: Option<Chamber>,
    #[serde(default, alias = "groupCode", alias = "group_code")]
    groupe_sigle: Option<String>,
    #[serde(default, alias = "groupName", alias = "group_name")]
    groupe_nom: Option<String>,
    #[serde(default, alias = "photoUrl")]
    photo: Option<String>,
}

impl RawRecord {
    fn into_record(self, fallback: Chamber) -> PoliticianRecord {
        let full_name = match self.nom_complet.filter(|n| !n.trim().is_empty()) {
            Some(n) => s!(n.trim()),
            None => {
                let prenom = self.prenom.unwrap_or_default();
                let nom = self.nom.unwrap_or_default();
                s!(join!(prenom.trim(), " ", nom.trim()).trim())
            }
        };
        let id = match self.id {
            Some(Value::String(s)) => s,
            Some(Value::Null) | None => s!(),
            Some(other) => other.to_string(),
        };

        PoliticianRecord {
            id,
            full_name,
            chamber: self.chamber.unwrap_or(fallback),
            group_code: s!(self.groupe_sigle.unwrap_or_default().trim()),
            group_name: s!(self.groupe_nom.unwrap_or_default().trim()),
            photo: s!(self.photo.unwrap_or_default().trim()),
        }
    }
}

/// Decode one resource. The document must be a JSON array; elements that do not
/// look like a record are skipped. Photo-less records are dropped.
pub fn parse_records(
    bytes: &[u8],
    chamber: Chamber,
    location: &str,
) -> Result<Vec<PoliticianRecord>, GameError> {
    let items: Vec<Value> = serde_json::from_slice(bytes).map_err(|source| GameError::Decode {
        location: s!(location),
        source,
    })?;

    let total = items.len();
    let mut out = Vec::with_capacity(total);
    let mut skipped = 0usize;

    for (i, item) in items.into_iter().enumerate() {
        match RawRecord::deserialize(item) {
            Ok(raw) => {
                let rec = raw.into_record(chamber);
                if rec.has_photo() {
                    out.push(rec);
                } else {
                    skipped += 1;
                }
            }
            Err(e) => {
                logw!("Load: {} item {} skipped: {}", location, i, e);
                skipped += 1;
            }
        }
    }

    logd!("Load: {} → {} records kept, {} skipped", location, out.len(), skipped);
    Ok(out)
}

fn fetch_chamber<F: Fetch + ?Sized>(
    fetcher: &F,
    loc: &Location,
    chamber: Chamber,
) -> Result<Vec<PoliticianRecord>, GameError> {
    let label = loc.to_string();
    let bytes = fetcher.fetch(loc).map_err(|e| GameError::Fetch {
        location: label.clone(),
        message: e.to_string(),
    })?;
    parse_records(&bytes, chamber, &label)
}

/// Load both chambers. See the module docs for the fallback rules.
pub fn load<F: Fetch + ?Sized>(
    fetcher: &F,
    sources: &DataSources,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Dataset, GameError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(2);
        p.log("Chargement des données…");
    }
    logf!("Load: Begin deputes={} senateurs={}", sources.deputes, sources.senateurs);

    let (dep, sen) = thread::scope(|s| {
        let d = s.spawn(|| fetch_chamber(fetcher, &sources.deputes, Chamber::LowerHouse));
        let n = s.spawn(|| fetch_chamber(fetcher, &sources.senateurs, Chamber::UpperHouse));
        (joined(d.join(), &sources.deputes), joined(n.join(), &sources.senateurs))
    });

    let (dep, sen) = match (dep, sen) {
        (Ok(d), Ok(s)) => (Ok(d), Ok(s)),
        (d, s) => {
            logw!("Load: Combined fetch failed, trying each source on its own");
            if let Some(p) = progress.as_deref_mut() {
                p.log("Nouvelle tentative source par source…");
            }
            let d = d.or_else(|_| fetch_chamber(fetcher, &sources.deputes, Chamber::LowerHouse));
            let s = s.or_else(|_| fetch_chamber(fetcher, &sources.senateurs, Chamber::UpperHouse));
            (d, s)
        }
    };

    let (deputes, dep_reason) = settle(dep, "Députés", progress.as_deref_mut());
    let (senateurs, sen_reason) = settle(sen, "Sénateurs", progress.as_deref_mut());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let data = Dataset::new(deputes, senateurs);
    if data.is_empty() {
        loge!("Load: No data (deputes: {}; senateurs: {})", dep_reason, sen_reason);
        return Err(GameError::DataUnavailable { deputes: dep_reason, senateurs: sen_reason });
    }

    logf!("Load: OK deputes={} senateurs={}", data.deputes.len(), data.senateurs.len());
    Ok(data)
}

fn joined(
    res: thread::Result<Result<Vec<PoliticianRecord>, GameError>>,
    loc: &Location,
) -> Result<Vec<PoliticianRecord>, GameError> {
    res.unwrap_or_else(|_| {
        Err(GameError::Fetch { location: loc.to_string(), message: s!("loader thread panicked") })
    })
}

/// Turn one side's outcome into records plus a reason string for the error case.
fn settle(
    res: Result<Vec<PoliticianRecord>, GameError>,
    label: &str,
    progress: Option<&mut (dyn Progress + '_)>,
) -> (Vec<PoliticianRecord>, String) {
    match res {
        Ok(records) if records.is_empty() => {
            logw!("Load: {} is empty", label);
            if let Some(p) = progress {
                p.item_failed(label, "vide");
            }
            (records, s!("empty"))
        }
        Ok(records) => {
            if let Some(p) = progress {
                p.item_done(label, records.len());
            }
            (records, s!("ok"))
        }
        Err(e) => {
            loge!("Load: {} failed: {}", label, e);
            let reason = e.to_string();
            if let Some(p) = progress {
                p.item_failed(label, &reason);
            }
            (Vec::new(), reason)
        }
    }
}

/// Records per group code, most common first, ties by code.
pub fn group_stats(records: &[PoliticianRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in records {
        let code = r.group_code.as_str();
        let code = if code.is_empty() { "?" } else { code };
        *counts.entry(code).or_insert(0) += 1;
    }
    let mut out: Vec<(String, usize)> = counts.into_iter().map(|(c, n)| (s!(c), n)).collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}
