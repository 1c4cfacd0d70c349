use anyhow::{Context, bail};
use bombsweep_core::{CellCount, Coord, Coord2, Difficulty, GameConfig};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Click(Coord2),
    ToggleMode,
    NewGame(GameConfig),
    Snapshot,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  r ROW COL          reveal a cell
  f ROW COL          flag or unflag a cell
  c ROW COL          click a cell using the current mode
  m                  switch between reveal and flag mode
  n [easy|medium|hard|SIZE BOMBS]
                     start a new game
  s                  print the game as JSON
  h                  show this help
  q                  quit";

pub fn parse_difficulty(name: &str) -> Option<Difficulty> {
    Difficulty::ALL
        .into_iter()
        .find(|difficulty| difficulty.name().eq_ignore_ascii_case(name))
}

fn parse_coords<'a>(mut args: impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let (Some(row), Some(col)) = (args.next(), args.next()) else {
        bail!("expected ROW COL");
    };
    let row: Coord = row.parse().with_context(|| format!("invalid row {row:?}"))?;
    let col: Coord = col.parse().with_context(|| format!("invalid column {col:?}"))?;
    Ok((row, col))
}

impl Command {
    /// Parses one input line, `None` for a blank line.
    pub fn parse(line: &str, current: GameConfig) -> anyhow::Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };

        let command = match verb {
            "r" | "reveal" => Self::Reveal(parse_coords(words)?),
            "f" | "flag" => Self::Flag(parse_coords(words)?),
            "c" | "click" => Self::Click(parse_coords(words)?),
            "m" | "mode" => Self::ToggleMode,
            "s" | "snapshot" => Self::Snapshot,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            "n" | "new" => match (words.next(), words.next()) {
                (None, _) => Self::NewGame(current),
                (Some(name), None) => match parse_difficulty(name) {
                    Some(difficulty) => Self::NewGame(difficulty.config()),
                    None => bail!("unknown difficulty {name:?}"),
                },
                (Some(size), Some(bombs)) => {
                    let size: Coord = size
                        .parse()
                        .with_context(|| format!("invalid size {size:?}"))?;
                    let bombs: CellCount = bombs
                        .parse()
                        .with_context(|| format!("invalid bomb count {bombs:?}"))?;
                    // validated by the engine, so an invalid pair keeps the running game
                    Self::NewGame(GameConfig::new_unchecked(size, bombs))
                }
            },
            other => bail!("unknown command {other:?}, type h for help"),
        };
        Ok(Some(command))
    }
}
