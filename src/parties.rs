// src/parties.rs
//
// Group code → display name + colour.
// Known groups come from a static table; anything else gets a name from the
// pool (or the code itself) and a colour hashed from the code.

use std::fmt;

use crate::config::consts::{HASH_LIGHTNESS, HASH_SATURATION};
use crate::model::PoliticianRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartyColor {
    Rgb(u8, u8, u8),
    Hsl { hue: u16, saturation: u8, lightness: u8 },
}

impl PartyColor {
    /// Standard HSL → RGB conversion.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            PartyColor::Rgb(r, g, b) => (r, g, b),
            PartyColor::Hsl { hue, saturation, lightness } => {
                let h = f32::from(hue % 360) / 60.0;
                let s = f32::from(saturation.min(100)) / 100.0;
                let l = f32::from(lightness.min(100)) / 100.0;

                let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
                let x = c * (1.0 - (h % 2.0 - 1.0).abs());
                let m = l - c / 2.0;
                let (r, g, b) = match h as u8 {
                    0 => (c, x, 0.0),
                    1 => (x, c, 0.0),
                    2 => (0.0, c, x),
                    3 => (0.0, x, c),
                    4 => (x, 0.0, c),
                    _ => (c, 0.0, x),
                };
                let to8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
                (to8(r), to8(g), to8(b))
            }
        }
    }
}

impl fmt::Display for PartyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartyColor::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            PartyColor::Hsl { hue, saturation, lightness } => {
                write!(f, "hsl({hue}, {saturation}%, {lightness}%)")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartyConfig {
    pub code: String,
    pub display_name: String,
    pub color: PartyColor,
}

struct RegistryEntry {
    code: &'static str,
    name: &'static str,
    rgb: (u8, u8, u8),
}

const fn entry(code: &'static str, name: &'static str, rgb: (u8, u8, u8)) -> RegistryEntry {
    RegistryEntry { code, name, rgb }
}

// Assemblée nationale, 17e législature
// Sénat groups follow
static REGISTRY: &[RegistryEntry] = &[
    entry("RN", "Rassemblement National", (0x0d, 0x37, 0x8a)),
    entry("EPR", "Ensemble pour la République", (0xff, 0xd6, 0x00)),
    entry("LFI-NFP", "La France insoumise – NFP", (0xcc, 0x24, 0x43)),
    entry("SOC", "Socialistes et apparentés", (0xff, 0x80, 0x80)),
    entry("DR", "Droite Républicaine", (0x00, 0x66, 0xcc)),
    entry("EcoS", "Écologiste et Social", (0x00, 0xc0, 0x00)),
    entry("Dem", "Les Démocrates", (0xff, 0x99, 0x00)),
    entry("HOR", "Horizons & Indépendants", (0x00, 0xa5, 0xe2)),
    entry("LIOT", "Libertés, Indépendants, Outre-mer et Territoires", (0xc0, 0xc0, 0x80)),
    entry("GDR", "Gauche Démocrate et Républicaine", (0xdd, 0x00, 0x00)),
    entry("UDR", "Union des droites pour la République", (0x40, 0x40, 0x90)),
    entry("NI", "Non-inscrits", (0x9e, 0x9e, 0x9e)),
    entry("LR", "Les Républicains", (0x00, 0x51, 0xa3)),
    entry("SER", "Socialiste, Écologiste et Républicain", (0xe7, 0x5a, 0x7c)),
    entry("UC", "Union Centriste", (0x00, 0xb0, 0xd8)),
    entry("INDEP", "Les Indépendants – République et Territoires", (0x2f, 0x6e, 0xba)),
    entry("RDPI", "Rassemblement des démocrates, progressistes et indépendants", (0xff, 0xc4, 0x00)),
    entry("CRCE-K", "Communiste Républicain Citoyen Écologiste – Kanaky", (0xb0, 0x00, 0x00)),
    entry("RDSE", "Rassemblement Démocratique et Social Européen", (0xf0, 0xa0, 0x40)),
    entry("GEST", "Écologiste – Solidarité et Territoires", (0x3c, 0xb0, 0x43)),
];

/// Static lookup only. `None` for codes the table does not know.
pub fn registered(code: &str) -> Option<PartyConfig> {
    REGISTRY.iter().find(|e| e.code == code).map(|e| PartyConfig {
        code: s!(e.code),
        display_name: s!(e.name),
        color: PartyColor::Rgb(e.rgb.0, e.rgb.1, e.rgb.2),
    })
}

/// Resolve `code` for display. Pure in `(code, pool, registry)`.
pub fn resolve(code: &str, pool: &[PoliticianRecord]) -> PartyConfig {
    if let Some(cfg) = registered(code) {
        return cfg;
    }

    let display_name = pool
        .iter()
        .find(|r| r.group_code == code && !r.group_name.trim().is_empty())
        .map(|r| r.group_name.clone())
        .unwrap_or_else(|| s!(code));

    PartyConfig {
        code: s!(code),
        display_name,
        color: hashed_color(code),
    }
}

/// Deterministic colour for an unknown code.
pub fn hashed_color(code: &str) -> PartyColor {
    PartyColor::Hsl {
        hue: hue_of(code),
        saturation: HASH_SATURATION,
        lightness: HASH_LIGHTNESS,
    }
}

/// `hash = c + ((hash << 5) - hash)` in 32-bit wrapping arithmetic over
/// UTF-16 units, then |hash| mod 360.
pub fn hue_of(code: &str) -> u16 {
    let mut hash: i32 = 0;
    for unit in code.encode_utf16() {
        hash = i32::from(unit).wrapping_add((hash << 5).wrapping_sub(hash));
    }
    (hash.unsigned_abs() % 360) as u16
}
