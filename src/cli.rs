// src/cli.rs
use std::{
    env,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use color_eyre::eyre::{eyre, Result};

use crate::{
    config::{consts::CONFIG_FILE, file, options::GameOptions},
    core::location::{Location, SourceFetcher},
    dataset::{self, Dataset},
    game::{GameSession, Input, Key, Outcome, Phase, Turn},
    model::Chamber,
    progress::Progress,
    store::FileStore,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Stats,
    Play,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub action: Action,
    pub config: PathBuf,
    /// `(key, value)` pairs applied on top of the config file.
    pub overrides: Vec<(String, String)>,
}

pub fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    let opts = resolve_options(&args)?;

    let mut progress = CliProgress;
    let data = dataset::load(&SourceFetcher, &opts.sources, Some(&mut progress))?;

    match args.action {
        Action::Stats => print_stats(&data),
        Action::Play => play(data, &opts)?,
    }
    Ok(())
}

pub fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<CliArgs> {
    let mut out = CliArgs {
        action: Action::Stats,
        config: PathBuf::from(CONFIG_FILE),
        overrides: Vec::new(),
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--stats" => out.action = Action::Stats,
            "--play" => out.action = Action::Play,
            "--deputes" | "--senateurs" | "--root" | "--mode" | "--seed" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for {}", a))?;
                out.overrides.push((s!(a.trim_start_matches("--")), v));
            }
            "--config" => {
                out.config = PathBuf::from(args.next().ok_or_else(|| eyre!("Missing config path"))?);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(eyre!("Unknown arg: {}", a)),
        }
    }
    Ok(out)
}

/// Config file first, then flags. Bad flag values are errors here, unlike in the file.
pub fn resolve_options(args: &CliArgs) -> Result<GameOptions> {
    let mut opts = file::load(&args.config);
    for (key, value) in &args.overrides {
        match key.as_str() {
            "mode" => opts.set_mode(value)?,
            "seed" => opts.seed = Some(value.parse().map_err(|e| eyre!("Bad seed {}: {}", value, e))?),
            _ => opts.set_source(key, value)?,
        }
    }
    Ok(opts)
}

fn print_stats(data: &Dataset) {
    for chamber in [Chamber::LowerHouse, Chamber::UpperHouse] {
        let records = data.chamber(chamber);
        println!("\n{} : {} fiches", chamber.house(), records.len());
        for (code, count) in dataset::group_stats(records) {
            let party = crate::parties::resolve(&code, records);
            println!("  {:<10} {:>4}  {}", code, count, party.display_name);
        }
    }
}

fn play(data: Dataset, opts: &GameOptions) -> Result<()> {
    let mut session = GameSession::seeded(data, Box::new(FileStore::default()), opts.seed, opts.filter);
    let root = &opts.sources.root;

    let first = session.current_turn();
    let mut turn = settle_photos(&mut session, root, first);
    let Some(first) = &turn else {
        println!("Aucun portrait jouable pour ce mode.");
        return Ok(());
    };
    show_turn(&session, first, root);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let text = line.trim();
        if text.eq_ignore_ascii_case("q") {
            break;
        }

        let input = if text.is_empty() {
            Input::Key(Key::Enter)
        } else if let Ok(d) = text.parse::<u8>() {
            Input::Key(Key::Digit(d))
        } else {
            // group codes are mixed case ("EcoS", "Dem")
            let code = session
                .active_codes()
                .iter()
                .find(|c| c.eq_ignore_ascii_case(text))
                .cloned()
                .unwrap_or_else(|| s!(text));
            Input::Choice(code)
        };

        match session.handle(&input).outcome {
            Outcome::Revealed(reveal) => {
                let mark = if reveal.correct { "✔ Bonne réponse" } else { "✘ Raté" };
                println!("{mark} : {}, {} ({})", reveal.full_name, reveal.answer.display_name, reveal.answer.code);
                let b = session.scoreboard();
                println!("Score {}/{}  Série {}  Record {}  (Entrée pour continuer)", b.score, b.total, b.streak, b.best);
            }
            Outcome::Advanced(next) => {
                turn = settle_photos(&mut session, root, next);
                match &turn {
                    Some(t) => show_turn(&session, t, root),
                    None => {
                        println!("Plus aucun portrait disponible.");
                        break;
                    }
                }
            }
            Outcome::Ignored => match session.phase() {
                Phase::Unanswered => println!("Répondez avec 1-{} ou un sigle.", session.choices().len().min(9)),
                Phase::Answered => println!("Entrée pour continuer, q pour quitter."),
            },
        }
        io::stdout().flush()?;
    }

    let b = session.scoreboard();
    println!("\nFin : {}/{} ({}%), record {}", b.score, b.total, b.accuracy(), b.best);
    Ok(())
}

/// A terminal cannot show the photo, but a missing local file is still a
/// broken photo: report it so the record is pruned like in the GUI.
fn settle_photos(session: &mut GameSession, root: &Location, mut turn: Option<Turn>) -> Option<Turn> {
    while let Some(t) = &turn {
        let missing = match root.join(&t.record.photo) {
            Ok(Location::File(p)) => !p.is_file(),
            Ok(Location::Http { .. }) => false,
            Err(_) => true,
        };
        if !missing {
            break;
        }
        turn = match session.photo_failed(t.id) {
            Outcome::Advanced(next) => next,
            _ => None,
        };
    }
    turn
}

fn show_turn(session: &GameSession, turn: &Turn, root: &Location) {
    let photo = root
        .join(&turn.record.photo)
        .map(|l| l.to_string())
        .unwrap_or_else(|_| turn.record.photo.clone());
    println!("\n[{}] {}", turn.record.chamber.label(), photo);
    for choice in session.choices() {
        let key = choice.shortcut.map(|n| n.to_string()).unwrap_or_else(|| s!("-"));
        println!("  {key}. {:<10} {}", choice.party.code, choice.party.display_name);
    }
    print!("> ");
    let _ = io::stdout().flush();
}

struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, label: &str, records: usize) {
        eprintln!("  ✓ {label} : {records} fiches");
    }
    fn item_failed(&mut self, label: &str, reason: &str) {
        eprintln!("  ✗ {label} : {reason}");
    }
}
