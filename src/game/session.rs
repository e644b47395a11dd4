// src/game/session.rs
//
// The turn state machine.
//
//   select_filter ─▶ advance ─▶ [Unanswered] ─guess─▶ [Answered] ─advance─▶ …
//                      ▲                │
//                      └─ photo_failed ─┘   (prune + advance, may cascade)
//
// One session per chamber filter; `select_filter` rebuilds it in place and only
// the best streak survives.

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    dataset::Dataset,
    model::{ChamberFilter, PoliticianRecord},
    parties,
    store::StreakStore,
};

use super::{
    events::{ButtonVisual, ChoiceButton, Handled, Outcome, Reveal, Scoreboard, Turn, TurnId},
    input::{self, Command, Input, Phase},
};

pub struct GameSession<R: Rng = ChaCha8Rng> {
    data: Dataset,
    filter: ChamberFilter,

    // play pool, shuffled; records are pruned when their photo fails
    pool: Vec<PoliticianRecord>,
    cursor: usize,
    presenting: bool,
    turn_id: TurnId,

    score: u32,
    total_answered: u32,
    current_streak: u32,
    best_streak: u32,

    answered_current: bool,
    last_reveal: Option<Reveal>,

    // sorted distinct codes of `pool`, fixed until the next filter change
    active_codes: Vec<String>,
    choices: Vec<ChoiceButton>,

    store: Box<dyn StreakStore>,
    rng: R,
}

impl GameSession<ChaCha8Rng> {
    /// Production constructor: ChaCha8 seeded from `seed`, or from entropy.
    /// The seed is logged so a run can be replayed.
    pub fn seeded(
        data: Dataset,
        store: Box<dyn StreakStore>,
        seed: Option<u64>,
        filter: ChamberFilter,
    ) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        logf!("Session: Shuffle seed {}", seed);
        Self::new(data, store, ChaCha8Rng::seed_from_u64(seed), filter)
    }
}

impl<R: Rng> GameSession<R> {
    /// Build a session and present the first candidate of `filter`.
    pub fn new(data: Dataset, store: Box<dyn StreakStore>, rng: R, filter: ChamberFilter) -> Self {
        let best_streak = store.load();
        logf!(
            "Session: New (deputes={}, senateurs={}, best streak={})",
            data.deputes.len(),
            data.senateurs.len(),
            best_streak
        );

        let mut session = Self {
            data,
            filter,
            pool: Vec::new(),
            cursor: 0,
            presenting: false,
            turn_id: 0,
            score: 0,
            total_answered: 0,
            current_streak: 0,
            best_streak,
            answered_current: false,
            last_reveal: None,
            active_codes: Vec::new(),
            choices: Vec::new(),
            store,
            rng,
        };
        session.select_filter(filter);
        session
    }

    /* ---------- operations ---------- */

    /// Full reset onto the records `filter` selects, then present the first one.
    /// Counters go back to zero; the best streak is kept.
    pub fn select_filter(&mut self, filter: ChamberFilter) -> Option<Turn> {
        self.filter = filter;
        self.pool = self
            .data
            .select(filter)
            .into_iter()
            // a record's own chamber wins over the file it came from
            .filter(|r| filter.includes(r.chamber) && r.is_playable())
            .collect();
        self.pool.shuffle(&mut self.rng);

        self.active_codes = self.pool.iter().map(|r| r.group_code.clone()).collect();
        self.active_codes.sort();
        self.active_codes.dedup();

        self.choices = self
            .active_codes
            .iter()
            .enumerate()
            .map(|(index, code)| ChoiceButton {
                index,
                shortcut: input::shortcut_for(index),
                party: parties::resolve(code, &self.pool),
            })
            .collect();

        self.score = 0;
        self.total_answered = 0;
        self.current_streak = 0;
        self.cursor = 0;
        self.presenting = false;

        logf!(
            "Session: Filter {:?} → pool={} groups={}",
            filter,
            self.pool.len(),
            self.active_codes.len()
        );

        self.advance_from(0)
    }

    /// Record a guess for the current candidate. Ignored once answered.
    pub fn guess(&mut self, code: &str) -> Outcome {
        if !self.presenting || self.answered_current {
            logd!("Session: Guess {:?} ignored (phase={:?})", code, self.phase());
            return Outcome::Ignored;
        }
        let Some(record) = self.pool.get(self.cursor) else {
            return Outcome::Ignored;
        };

        self.answered_current = true;
        self.total_answered += 1;

        let correct = record.group_code == code;
        let answer_code = record.group_code.clone();
        let full_name = record.full_name.clone();

        if correct {
            self.score += 1;
            self.current_streak += 1;
            if self.current_streak > self.best_streak {
                self.best_streak = self.current_streak;
                logf!("Session: New best streak {}", self.best_streak);
                if let Err(e) = self.store.save(self.best_streak) {
                    loge!("Store: Saving best streak failed: {}", e);
                }
            }
        } else {
            self.current_streak = 0;
        }

        let buttons = self
            .active_codes
            .iter()
            .map(|c| {
                if *c == answer_code {
                    ButtonVisual::Correct
                } else if c == code {
                    ButtonVisual::Wrong
                } else {
                    ButtonVisual::Dimmed
                }
            })
            .collect();

        let reveal = Reveal {
            correct,
            full_name,
            answer: self.party(&answer_code),
            guessed: s!(code),
            buttons,
        };
        logd!(
            "Session: Guess {} for {} → {}",
            code,
            answer_code,
            if correct { "correct" } else { "wrong" }
        );
        self.last_reveal = Some(reveal.clone());
        Outcome::Revealed(reveal)
    }

    /// Move on after a reveal. Ignored while the current candidate is unanswered.
    pub fn advance(&mut self) -> Outcome {
        if !self.answered_current {
            logd!("Session: Advance ignored, current candidate unanswered");
            return Outcome::Ignored;
        }
        Outcome::Advanced(self.advance_from(self.cursor + 1))
    }

    /// The photo of turn `turn` could not be shown: drop that record for the rest
    /// of the session and present the next one. Stale turn ids are ignored.
    pub fn photo_failed(&mut self, turn: TurnId) -> Outcome {
        if !self.presenting || turn != self.turn_id || self.cursor >= self.pool.len() {
            logd!("Session: Stale photo failure for turn {} (current {})", turn, self.turn_id);
            return Outcome::Ignored;
        }
        let pruned = self.pool.remove(self.cursor);
        logw!(
            "Session: Pruned {} ({}) after photo failure, pool={}",
            pruned.full_name,
            pruned.photo,
            self.pool.len()
        );
        self.presenting = false;
        // the next record slid into `cursor`
        Outcome::Advanced(self.advance_from(self.cursor))
    }

    /// Map one user input and run the resulting operation.
    pub fn handle(&mut self, event: &Input) -> Handled {
        let mapped = input::map(event, self.phase(), &self.active_codes);
        let outcome = match mapped.command {
            Some(Command::Guess(code)) => self.guess(&code),
            Some(Command::Advance) => self.advance(),
            None => Outcome::Ignored,
        };
        Handled { outcome, suppress_default: mapped.suppress_default }
    }

    fn advance_from(&mut self, next: usize) -> Option<Turn> {
        self.answered_current = false;
        self.last_reveal = None;

        if self.pool.is_empty() {
            self.presenting = false;
            logw!("Session: Pool is empty, nothing to present");
            return None;
        }

        let mut next = next;
        if next >= self.pool.len() {
            self.pool.shuffle(&mut self.rng);
            next = 0;
            logd!("Session: Pass complete, reshuffled {} records", self.pool.len());
        }

        self.cursor = next;
        self.presenting = true;
        self.turn_id += 1;
        self.current_turn()
    }

    /* ---------- queries ---------- */

    pub fn current_turn(&self) -> Option<Turn> {
        if !self.presenting {
            return None;
        }
        self.pool.get(self.cursor).map(|record| Turn { id: self.turn_id, record: record.clone() })
    }

    pub fn current(&self) -> Option<&PoliticianRecord> {
        if self.presenting { self.pool.get(self.cursor) } else { None }
    }

    pub fn phase(&self) -> Phase {
        if self.answered_current { Phase::Answered } else { Phase::Unanswered }
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            score: self.score,
            total: self.total_answered,
            streak: self.current_streak,
            best: self.best_streak,
        }
    }

    /// Display config for `code`, preferring the cached choice entry.
    pub fn party(&self, code: &str) -> parties::PartyConfig {
        self.choices
            .iter()
            .find(|c| c.party.code == code)
            .map(|c| c.party.clone())
            .unwrap_or_else(|| parties::resolve(code, &self.pool))
    }

    pub fn choices(&self) -> &[ChoiceButton] { &self.choices }
    pub fn active_codes(&self) -> &[String] { &self.active_codes }
    pub fn pool(&self) -> &[PoliticianRecord] { &self.pool }
    pub fn cursor(&self) -> usize { self.cursor }
    pub fn filter(&self) -> ChamberFilter { self.filter }
    pub fn dataset(&self) -> &Dataset { &self.data }
    pub fn last_reveal(&self) -> Option<&Reveal> { self.last_reveal.as_ref() }
    pub fn turn_id(&self) -> TurnId { self.turn_id }

    /// True when pruning (or an empty filter) left nothing to play.
    pub fn is_exhausted(&self) -> bool {
        self.pool.is_empty()
    }
}
