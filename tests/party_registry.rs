// tests/party_registry.rs
use polidle::model::{Chamber, PoliticianRecord};
use polidle::parties::{self, PartyColor};

fn pool() -> Vec<PoliticianRecord> {
    vec![
        PoliticianRecord::new("A", Chamber::UpperHouse, "XYZ", "", "a.jpg"),
        PoliticianRecord::new("B", Chamber::UpperHouse, "XYZ", "Groupe Expérimental", "b.jpg"),
        PoliticianRecord::new("C", Chamber::LowerHouse, "RN", "Some other name", "c.jpg"),
    ]
}

#[test]
fn registry_wins_over_pool_names() {
    let rn = parties::resolve("RN", &pool());
    assert_eq!(rn.display_name, "Rassemblement National");
    assert_eq!(rn.color, PartyColor::Rgb(0x0d, 0x37, 0x8a));
    assert_eq!(rn.color.to_string(), "#0d378a");
}

#[test]
fn unknown_code_takes_first_non_blank_pool_name() {
    let p = parties::resolve("XYZ", &pool());
    assert_eq!(p.code, "XYZ");
    assert_eq!(p.display_name, "Groupe Expérimental");
    assert_eq!(p.color, parties::hashed_color("XYZ"));
}

#[test]
fn unknown_code_without_name_shows_the_code() {
    let p = parties::resolve("QQ", &pool());
    assert_eq!(p.display_name, "QQ");
    assert!(parties::registered("QQ").is_none());
}

#[test]
fn hashed_colour_is_stable_and_in_range() {
    for code in ["XYZ", "LIOT-2", "Écolo", "a-very-long-group-code-that-overflows-the-hash"] {
        let a = parties::hashed_color(code);
        assert_eq!(a, parties::hashed_color(code));
        let PartyColor::Hsl { hue, saturation, lightness } = a else { panic!("expected HSL") };
        assert!(hue < 360);
        assert_eq!((saturation, lightness), (55, 50));
    }
    assert_eq!(parties::hashed_color("AB").to_string(), "hsl(281, 55%, 50%)");
}

#[test]
fn resolve_is_pure() {
    let p = pool();
    assert_eq!(parties::resolve("XYZ", &p), parties::resolve("XYZ", &p));
    assert_eq!(parties::resolve("SOC", &[]).display_name, "Socialistes et apparentés");
}
