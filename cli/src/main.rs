use std::io::{self, BufRead, Write};

use anyhow::Context;
use bombsweep_core::{
    CellCount, ClickResult, Coord, Difficulty, GameConfig, GameState, RandomBoardGenerator,
};
use clap::{Parser, ValueEnum};

use command::{Command, HELP};
use notify::{CueListener, spawn_cues};

mod command;
mod notify;
mod render;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset, ignored when --size and --bombs are given
    #[arg(short, long, value_enum, default_value_t = DifficultyArg::Easy)]
    difficulty: DifficultyArg,

    /// Side length of a custom board
    #[arg(long, requires = "bombs")]
    size: Option<Coord>,

    /// Bomb count of a custom board
    #[arg(long, requires = "size")]
    bombs: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print JSON snapshots instead of the text board
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> anyhow::Result<GameConfig> {
        match (self.size, self.bombs) {
            (Some(size), Some(bombs)) => {
                GameConfig::new(size, bombs).context("invalid custom board")
            }
            _ => Ok(Difficulty::from(self.difficulty).config()),
        }
    }
}

type Game = GameState<RandomBoardGenerator, CueListener>;

fn show(game: &Game, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let snapshot = game.snapshot();
    if json {
        serde_json::to_writer(&mut *out, &snapshot)?;
    } else {
        out.write_all(render::render(&snapshot).as_bytes())?;
    }
    writeln!(out)?;
    Ok(())
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let (listener, cues) = spawn_cues(1);
    let mut game = Game::with_listener(RandomBoardGenerator::new(seed), listener, config)?;

    let mut out = io::stdout().lock();
    show(&game, args.json, &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = match Command::parse(&line, game.config()) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {err:#}")?;
                continue;
            }
        };

        match command {
            Command::Reveal(coords) => {
                game.reveal_cell(coords);
            }
            Command::Flag(coords) => {
                game.toggle_flag(coords);
            }
            Command::Click(coords) => match game.click(coords) {
                ClickResult::Reveal(result) => {
                    log::debug!("revealed {} cells", result.revealed.len())
                }
                ClickResult::Flag(result) => log::debug!("flag outcome {:?}", result.outcome),
            },
            Command::ToggleMode => {
                game.toggle_input_mode();
            }
            Command::NewGame(config) => {
                if let Err(err) = game.new_game(config.size, config.bombs) {
                    writeln!(out, "error: {err}")?;
                    continue;
                }
            }
            Command::Snapshot => {
                show(&game, true, &mut out)?;
                continue;
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }
        show(&game, args.json, &mut out)?;
    }

    log::debug!("{} cues dropped", game.listener().dropped());
    drop(game);
    cues.join().map_err(|_| anyhow::anyhow!("cue thread panicked"))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();
    log::debug!("{:?}", args);

    run(&args)
}
