// tests/session_rules.rs
//
// Turn state machine, driven without any UI.
//
use polidle::dataset::Dataset;
use polidle::game::{ButtonVisual, GameSession, Input, Key, Outcome, Phase};
use polidle::model::{Chamber, ChamberFilter, PoliticianRecord};
use polidle::store::MemoryStore;

fn dep(name: &str, code: &str) -> PoliticianRecord {
    PoliticianRecord::new(name, Chamber::LowerHouse, code, "", &format!("photos/{name}.jpg"))
}

fn sen(name: &str, code: &str) -> PoliticianRecord {
    PoliticianRecord::new(name, Chamber::UpperHouse, code, "", &format!("photos/{name}.jpg"))
}

fn start(data: Dataset, store: &MemoryStore) -> GameSession {
    GameSession::seeded(data, Box::new(store.clone()), Some(7), ChamberFilter::AllChambers)
}

fn current_code(s: &GameSession) -> String {
    s.current().map(|r| r.group_code.clone()).unwrap()
}

fn mixed() -> Dataset {
    Dataset::new(
        vec![dep("Ada", "SOC"), dep("Basile", "LR"), dep("Chloé", "RN")],
        vec![sen("Denis", "LR"), sen("Élise", "UC")],
    )
}

#[test]
fn right_guess_scores_and_wrong_guess_resets_streak() {
    let data = Dataset::new(vec![dep("Ada", "SOC"), dep("Basile", "SOC")], vec![sen("Denis", "LR")]);
    let store = MemoryStore::default();
    let mut s = GameSession::seeded(data, Box::new(store.clone()), Some(1), ChamberFilter::LowerHouseOnly);

    let Outcome::Revealed(r) = s.guess("SOC") else { panic!("expected a reveal") };
    assert!(r.correct);
    assert_eq!(r.answer.code, "SOC");
    assert_eq!((s.scoreboard().score, s.scoreboard().streak), (1, 1));

    s.advance();
    let Outcome::Revealed(r) = s.guess("LR") else { panic!("expected a reveal") };
    assert!(!r.correct);
    assert_eq!(r.answer.code, "SOC");
    assert_eq!(r.guessed, "LR");
    let b = s.scoreboard();
    assert_eq!((b.score, b.total, b.streak, b.best), (1, 2, 0, 1));
}

#[test]
fn second_guess_on_same_candidate_is_ignored() {
    let store = MemoryStore::default();
    let mut s = start(mixed(), &store);
    let code = current_code(&s);

    assert!(!s.guess(&code).is_ignored());
    assert!(s.guess(&code).is_ignored());
    assert!(s.guess("NOPE").is_ignored());
    assert_eq!(s.scoreboard().total, 1);
    assert_eq!(s.scoreboard().score, 1);
    assert_eq!(s.phase(), Phase::Answered);
}

#[test]
fn score_never_exceeds_total() {
    let store = MemoryStore::default();
    let mut s = start(mixed(), &store);
    for i in 0..40 {
        let guess = if i % 3 == 0 { "XX".to_string() } else { current_code(&s) };
        s.guess(&guess);
        let b = s.scoreboard();
        assert!(b.score <= b.total);
        assert!(b.streak <= b.best);
        s.advance();
    }
    assert_eq!(s.scoreboard().total, 40);
}

#[test]
fn best_streak_is_monotone_persisted_and_survives_filter_change() {
    let store = MemoryStore::default();
    let mut s = start(mixed(), &store);

    for ok in [true, true, false, true] {
        let g = if ok { current_code(&s) } else { "XX".to_string() };
        s.guess(&g);
        s.advance();
    }
    let b = s.scoreboard();
    assert_eq!((b.score, b.total, b.streak, b.best), (3, 4, 1, 2));
    assert_eq!(store.value(), 2);
    assert_eq!(store.writes(), 2);

    s.select_filter(ChamberFilter::UpperHouseOnly);
    let b = s.scoreboard();
    assert_eq!((b.score, b.total, b.streak, b.best), (0, 0, 0, 2));
    assert!(s.pool().iter().all(|r| r.chamber == Chamber::UpperHouse));
}

#[test]
fn stored_best_is_loaded_and_only_beaten_values_are_written() {
    let store = MemoryStore::with_value(5);
    let mut s = start(mixed(), &store);
    assert_eq!(s.scoreboard().best, 5);

    let code = current_code(&s);
    s.guess(&code);
    assert_eq!(s.scoreboard().best, 5);
    assert_eq!(store.writes(), 0);
}

#[test]
fn active_codes_are_sorted_and_distinct() {
    let data = Dataset::new(vec![dep("A", "RN"), dep("B", "EPR"), dep("C", "RN")], vec![]);
    let store = MemoryStore::default();
    let s = start(data, &store);

    assert_eq!(s.active_codes(), ["EPR", "RN"]);
    let shortcuts: Vec<_> = s.choices().iter().map(|c| c.shortcut).collect();
    assert_eq!(shortcuts, [Some(1), Some(2)]);
    assert_eq!(s.choices()[1].party.display_name, "Rassemblement National");
}

#[test]
fn reveal_marks_answer_pick_and_the_rest() {
    let store = MemoryStore::default();
    let mut s = start(mixed(), &store);
    let answer = current_code(&s);
    let wrong = s.active_codes().iter().find(|c| **c != answer).cloned().unwrap();

    let Outcome::Revealed(r) = s.guess(&wrong) else { panic!("expected a reveal") };
    for (code, visual) in s.active_codes().iter().zip(&r.buttons) {
        let want = if *code == answer {
            ButtonVisual::Correct
        } else if *code == wrong {
            ButtonVisual::Wrong
        } else {
            ButtonVisual::Dimmed
        };
        assert_eq!(*visual, want, "button {code}");
    }
    assert_eq!(s.last_reveal(), Some(&r));
}

#[test]
fn advance_is_ignored_until_answered() {
    let store = MemoryStore::default();
    let mut s = start(mixed(), &store);
    let turn = s.turn_id();

    assert!(s.advance().is_ignored());
    assert_eq!(s.turn_id(), turn);

    s.guess("XX");
    let Outcome::Advanced(Some(next)) = s.advance() else { panic!("expected a new turn") };
    assert_eq!(next.id, turn + 1);
    assert_eq!(s.phase(), Phase::Unanswered);
    assert!(s.last_reveal().is_none());
}

#[test]
fn photo_failure_prunes_and_stale_reports_are_ignored() {
    let store = MemoryStore::default();
    let mut s = start(mixed(), &store);
    let first = s.current_turn().unwrap();

    let Outcome::Advanced(Some(next)) = s.photo_failed(first.id) else { panic!("expected a new turn") };
    assert_eq!(next.id, first.id + 1);
    assert_eq!(s.pool().len(), 4);
    assert!(!s.pool().contains(&first.record));

    // late report for the old turn
    assert!(s.photo_failed(first.id).is_ignored());
    assert_eq!(s.pool().len(), 4);
    assert_eq!(s.current_turn(), Some(next));
}

#[test]
fn photo_failures_can_exhaust_the_pool() {
    let data = Dataset::new(vec![dep("A", "RN"), dep("B", "EPR")], vec![]);
    let store = MemoryStore::default();
    let mut s = start(data, &store);

    let id = s.turn_id();
    assert!(matches!(s.photo_failed(id), Outcome::Advanced(Some(_))));
    let id = s.turn_id();
    assert_eq!(s.photo_failed(id), Outcome::Advanced(None));

    assert!(s.is_exhausted());
    assert!(s.current_turn().is_none());
    assert!(s.guess("RN").is_ignored());
    assert!(s.advance().is_ignored());
}

#[test]
fn finishing_a_pass_reshuffles_and_restarts() {
    let store = MemoryStore::default();
    let data = Dataset::new(vec![dep("A", "RN"), dep("B", "EPR"), dep("C", "SOC")], vec![]);
    let mut s = start(data, &store);

    let mut seen: Vec<String> = Vec::new();
    for _ in 0..3 {
        assert_eq!(s.cursor(), seen.len());
        seen.push(s.current().unwrap().full_name.clone());
        s.guess("XX");
        s.advance();
    }
    assert_eq!(s.cursor(), 0);
    seen.sort();
    assert_eq!(seen, ["A", "B", "C"]);

    let mut names: Vec<_> = s.pool().iter().map(|r| r.full_name.clone()).collect();
    names.sort();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn empty_selection_is_exhausted_not_an_error() {
    let data = Dataset::new(vec![dep("A", "RN")], vec![]);
    let store = MemoryStore::default();
    let mut s = start(data, &store);

    assert_eq!(s.select_filter(ChamberFilter::UpperHouseOnly), None);
    assert!(s.is_exhausted());
    assert!(s.choices().is_empty());

    assert!(s.select_filter(ChamberFilter::AllChambers).is_some());
}

#[test]
fn records_without_group_are_not_played() {
    let data = Dataset::new(vec![dep("A", "RN"), dep("B", "")], vec![]);
    let store = MemoryStore::default();
    let s = start(data, &store);
    assert_eq!(s.pool().len(), 1);
    assert_eq!(s.active_codes(), ["RN"]);
}

#[test]
fn same_seed_same_order() {
    let a = MemoryStore::default();
    let b = MemoryStore::default();
    let s1 = start(mixed(), &a);
    let s2 = start(mixed(), &b);
    assert_eq!(s1.pool(), s2.pool());
}

#[test]
fn keys_drive_the_session() {
    let store = MemoryStore::default();
    let mut s = start(mixed(), &store);

    let h = s.handle(&Input::Key(Key::Enter));
    assert!(h.outcome.is_ignored());
    assert!(!h.suppress_default);

    let h = s.handle(&Input::Key(Key::Digit(1)));
    let Outcome::Revealed(r) = h.outcome else { panic!("expected a reveal") };
    assert_eq!(r.guessed, s.active_codes()[0]);

    let h = s.handle(&Input::Key(Key::Space));
    assert!(h.suppress_default);
    assert!(matches!(h.outcome, Outcome::Advanced(Some(_))));
}

#[test]
fn filter_follows_each_record_own_chamber() {
    // a senator listed in the deputies file
    let data = Dataset::new(vec![dep("Ada", "SOC"), sen("Basile", "LR")], vec![sen("Denis", "UC")]);
    let store = MemoryStore::default();
    let mut s = GameSession::seeded(data, Box::new(store.clone()), Some(3), ChamberFilter::LowerHouseOnly);

    assert_eq!(s.pool().len(), 1);
    assert_eq!(s.pool()[0].full_name, "Ada");
    assert_eq!(s.active_codes(), ["SOC"]);

    s.select_filter(ChamberFilter::UpperHouseOnly);
    let mut names: Vec<_> = s.pool().iter().map(|r| r.full_name.clone()).collect();
    names.sort();
    assert_eq!(names, ["Denis"]);

    s.select_filter(ChamberFilter::AllChambers);
    assert_eq!(s.pool().len(), 3);
}
