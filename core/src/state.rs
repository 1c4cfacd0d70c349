use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
///
/// A finished game only changes again through [`GameState::new_game`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

/// What a plain click does.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    Reveal,
    Flag,
}

impl InputMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Reveal => Self::Flag,
            Self::Flag => Self::Reveal,
        }
    }
}

impl Default for InputMode {
    fn default() -> Self {
        Self::Reveal
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResult {
    /// Newly revealed cells, in reveal order.
    pub revealed: Vec<Cell>,
    pub status: GameStatus,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagResult {
    pub flagged: bool,
    pub remaining_flags: CellCount,
    pub outcome: FlagOutcome,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickResult {
    Reveal(RevealResult),
    Flag(FlagResult),
}

/// Everything a presentation layer needs to draw the current game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub status: GameStatus,
    pub flagged: CellCount,
    pub remaining_flags: CellCount,
    pub input_mode: InputMode,
    pub triggered: Option<Coord2>,
    pub grid: Grid,
}

/// Represents a game from start to finish, and every game after it started through
/// [`new_game`](Self::new_game).
#[derive(Clone, Debug)]
pub struct GameState<G = RandomBoardGenerator, L = ()> {
    generator: G,
    listener: L,
    config: GameConfig,
    grid: Grid,
    flags: FlagTracker,
    revealed_safe: CellCount,
    status: GameStatus,
    triggered: Option<Coord2>,
    input_mode: InputMode,
}

impl GameState {
    /// Random boards reproducible from `seed`.
    pub fn from_seed(seed: u64, config: GameConfig) -> Result<Self> {
        Self::new(RandomBoardGenerator::new(seed), config)
    }
}

impl<G: BoardGenerator> GameState<G> {
    pub fn new(generator: G, config: GameConfig) -> Result<Self> {
        Self::with_listener(generator, (), config)
    }
}

impl<G: BoardGenerator, L: GameListener> GameState<G, L> {
    pub fn with_listener(mut generator: G, listener: L, config: GameConfig) -> Result<Self> {
        let grid = generator.generate(config)?;
        log::debug!("New game, size: {}, bombs: {}", config.size, config.bombs);
        Ok(Self {
            generator,
            listener,
            config,
            grid,
            flags: FlagTracker::new(config.bombs),
            revealed_safe: 0,
            status: GameStatus::Playing,
            triggered: None,
            input_mode: InputMode::default(),
        })
    }

    /// Replaces the board with a freshly generated one and resets flags and status.
    ///
    /// On error the current game is left exactly as it was.
    pub fn new_game(&mut self, size: Coord, bombs: CellCount) -> Result<&Grid> {
        let config = GameConfig::new(size, bombs)?;
        let grid = self.generator.generate(config)?;
        log::debug!("New game, size: {}, bombs: {}", size, bombs);

        self.config = config;
        self.grid = grid;
        self.flags = FlagTracker::new(bombs);
        self.revealed_safe = 0;
        self.status = GameStatus::Playing;
        self.triggered = None;
        Ok(&self.grid)
    }

    pub fn new_game_with(&mut self, difficulty: Difficulty) -> Result<&Grid> {
        let config = difficulty.config();
        self.new_game(config.size, config.bombs)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn flagged(&self) -> CellCount {
        self.flags.flagged()
    }

    pub fn remaining_flags(&self) -> CellCount {
        self.flags.remaining()
    }

    /// The bomb that ended the game, if it was lost.
    pub fn triggered(&self) -> Option<Coord2> {
        self.triggered
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn toggle_input_mode(&mut self) -> InputMode {
        self.input_mode = self.input_mode.toggled();
        self.input_mode
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config,
            status: self.status,
            flagged: self.flags.flagged(),
            remaining_flags: self.flags.remaining(),
            input_mode: self.input_mode,
            triggered: self.triggered,
            grid: self.grid.clone(),
        }
    }

    /// Opens a cell, flooding through zero regions. Ignored after the game ended, on
    /// flagged or revealed cells and on coordinates outside the board.
    pub fn reveal_cell(&mut self, coords: Coord2) -> RevealResult {
        if self.status.is_finished() {
            return self.reveal_result(Vec::new());
        }

        let report = reveal(&mut self.grid, coords);
        if report.is_empty() {
            return self.reveal_result(Vec::new());
        }

        if let Some(at) = report.trigger {
            self.triggered = Some(at);
            self.status = GameStatus::Lost;
            log::debug!("Game lost, bomb at {:?}", at);
            self.listener.notify(&GameEvent::BombHit { at });
            return self.reveal_result(report.opened);
        }

        // the report only holds empty cells here
        self.revealed_safe += report.opened.len() as CellCount;
        let won = self.revealed_safe == self.config.safe_cells();
        if won {
            self.status = GameStatus::Won;
            log::debug!("Game won");
        }

        self.listener.notify(&GameEvent::Revealed {
            cells: report.opened.clone(),
        });
        if won {
            self.listener.notify(&GameEvent::Won);
        }
        self.reveal_result(report.opened)
    }

    /// Flags or unflags a cell, see [`FlagTracker::toggle`]. Ignored after the game ended.
    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagResult {
        let outcome = if self.status.is_finished() {
            FlagOutcome::NoChange
        } else {
            self.flags.toggle(&mut self.grid, coords)
        };

        let result = FlagResult {
            flagged: self.grid.get(coords).is_some_and(Cell::is_flagged),
            remaining_flags: self.flags.remaining(),
            outcome,
        };
        if outcome.has_update() {
            self.listener.notify(&GameEvent::FlagChanged {
                at: coords,
                flagged: result.flagged,
                remaining: result.remaining_flags,
            });
        }
        result
    }

    /// Reveals or flags depending on the current [`InputMode`].
    pub fn click(&mut self, coords: Coord2) -> ClickResult {
        match self.input_mode {
            InputMode::Reveal => ClickResult::Reveal(self.reveal_cell(coords)),
            InputMode::Flag => ClickResult::Flag(self.toggle_flag(coords)),
        }
    }

    fn reveal_result(&self, opened: Vec<Coord2>) -> RevealResult {
        RevealResult {
            revealed: opened.into_iter().map(|pos| self.grid[pos]).collect(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(size: Coord, bombs: &[Coord2]) -> GameState<FixedBoardGenerator> {
        let generator = FixedBoardGenerator::new(bombs.iter().copied());
        let config = generator.config(size).unwrap();
        GameState::new(generator, config).unwrap()
    }

    fn coords(result: &RevealResult) -> Vec<Coord2> {
        result.revealed.iter().map(Cell::coords).collect()
    }

    #[test]
    fn new_easy_game() {
        let game = GameState::from_seed(1, Difficulty::Easy.config()).unwrap();

        assert_eq!(game.grid().iter().count(), 81);
        assert_eq!(game.grid().bomb_count(), 10);
        assert_eq!(game.remaining_flags(), 10);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn flag_and_unflag_a_bomb() {
        let mut game = GameState::from_seed(9, Difficulty::Easy.config()).unwrap();
        let bomb = game
            .grid()
            .iter()
            .find(|cell| cell.is_bomb())
            .map(Cell::coords)
            .unwrap();

        let placed = game.toggle_flag(bomb);
        assert!(placed.flagged);
        assert_eq!(game.flagged(), 1);
        assert_eq!(placed.remaining_flags, 9);

        let removed = game.toggle_flag(bomb);
        assert!(!removed.flagged);
        assert_eq!(removed.remaining_flags, 10);
        assert_eq!(removed.outcome, FlagOutcome::Removed);
    }

    #[test]
    fn win_by_revealing_every_safe_cell() {
        let mut game = fixed(2, &[(0, 0)]);

        for pos in [(0, 1), (1, 0)] {
            let result = game.reveal_cell(pos);
            assert_eq!(coords(&result), vec![pos]);
            assert_eq!(result.status, GameStatus::Playing);
        }
        let result = game.reveal_cell((1, 1));

        assert_eq!(result.status, GameStatus::Won);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.flagged(), 0);
    }

    #[test]
    fn revealing_the_bomb_loses_at_any_point() {
        for already_open in 0..=2 {
            let mut game = fixed(2, &[(0, 0)]);
            for &pos in &[(0, 1), (1, 0)][..already_open] {
                game.reveal_cell(pos);
            }

            let result = game.reveal_cell((0, 0));

            assert_eq!(coords(&result), vec![(0, 0)]);
            assert_eq!(result.status, GameStatus::Lost);
            assert_eq!(game.triggered(), Some((0, 0)));
            assert_eq!(game.grid().revealed_count(), already_open as CellCount + 1);
        }
    }

    #[test]
    fn finished_game_ignores_commands() {
        let mut game = fixed(3, &[(0, 0)]);
        game.reveal_cell((0, 0));
        let before = game.snapshot();

        assert!(game.reveal_cell((2, 2)).revealed.is_empty());
        assert_eq!(game.toggle_flag((1, 1)).outcome, FlagOutcome::NoChange);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn flagged_cell_blocks_reveal() {
        let mut game = fixed(3, &[(0, 0)]);
        game.toggle_flag((0, 0));

        let result = game.reveal_cell((0, 0));

        assert!(result.revealed.is_empty());
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn flood_fill_wins_in_one_move() {
        let mut game = fixed(3, &[(2, 2)]);

        let result = game.reveal_cell((0, 0));

        assert_eq!(result.revealed.len(), 8);
        assert_eq!(result.status, GameStatus::Won);
        assert!(!game.grid()[(2, 2)].is_revealed());
    }

    #[test]
    fn flagged_safe_cell_delays_win() {
        let mut game = fixed(4, &[(3, 3)]);
        assert_eq!(game.toggle_flag((0, 3)).outcome, FlagOutcome::Placed);

        let result = game.reveal_cell((0, 0));

        assert_eq!(result.revealed.len(), 14);
        assert_eq!(result.status, GameStatus::Playing);
        assert!(game.grid()[(0, 3)].is_flagged());
        assert!(!game.grid()[(0, 3)].is_revealed());

        assert!(game.reveal_cell((0, 3)).revealed.is_empty());
        assert_eq!(game.toggle_flag((0, 3)).outcome, FlagOutcome::Removed);
        let result = game.reveal_cell((0, 3));

        assert_eq!(coords(&result), vec![(0, 3)]);
        assert_eq!(result.status, GameStatus::Won);
    }

    #[test]
    fn zero_bomb_board_is_won_by_first_reveal() {
        let mut game = fixed(4, &[]);
        assert_eq!(game.reveal_cell((3, 3)).status, GameStatus::Won);
    }

    #[test]
    fn out_of_range_commands_are_no_ops() {
        let mut game = fixed(3, &[(0, 0)]);

        assert!(game.reveal_cell((3, 3)).revealed.is_empty());
        let flag = game.toggle_flag((9, 0));
        assert_eq!(flag.outcome, FlagOutcome::NoChange);
        assert!(!flag.flagged);
        assert_eq!(flag.remaining_flags, 1);
    }

    #[test]
    fn invalid_new_game_keeps_previous_state() {
        let mut game = GameState::from_seed(5, Difficulty::Easy.config()).unwrap();
        game.reveal_cell((4, 4));
        game.toggle_input_mode();
        let before = game.snapshot();

        let err = game.new_game(9, 82).unwrap_err();

        assert_eq!(
            err,
            GameError::InvalidConfiguration(ConfigProblem::TooManyBombs {
                bombs: 82,
                capacity: 81
            })
        );
        assert!(matches!(
            game.new_game(0, 0),
            Err(GameError::InvalidConfiguration(ConfigProblem::ZeroSize))
        ));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn new_game_replaces_board_and_resets_counters() {
        let mut game = fixed(2, &[(0, 0)]);
        game.toggle_flag((0, 0));
        game.reveal_cell((1, 1));

        // the fixed layout only has one bomb, reuse it on a bigger board
        let grid = game.new_game(3, 1).unwrap();
        assert_eq!(grid.side(), 3);
        assert_eq!(grid.revealed_count(), 0);

        assert_eq!(game.flagged(), 0);
        assert_eq!(game.remaining_flags(), 1);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.triggered(), None);
    }

    #[test]
    fn new_game_from_lost_state() {
        let mut game = GameState::from_seed(3, Difficulty::Easy.config()).unwrap();
        let bomb = game.grid().iter().find(|cell| cell.is_bomb()).unwrap().coords();
        game.reveal_cell(bomb);
        assert_eq!(game.status(), GameStatus::Lost);

        game.new_game_with(Difficulty::Hard).unwrap();

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.config(), Difficulty::Hard.config());
        assert_eq!(game.grid().bomb_count(), 99);
        assert_eq!(game.remaining_flags(), 99);
    }

    #[test]
    fn click_follows_input_mode() {
        let mut game = fixed(3, &[(0, 0)]);

        let ClickResult::Reveal(reveal) = game.click((1, 1)) else {
            panic!("expected a reveal");
        };
        assert_eq!(coords(&reveal), vec![(1, 1)]);
        assert_eq!(game.toggle_input_mode(), InputMode::Flag);
        let ClickResult::Flag(flag) = game.click((0, 0)) else {
            panic!("expected a flag toggle");
        };
        assert!(flag.flagged);
        assert_eq!(game.snapshot().input_mode, InputMode::Flag);
    }

    #[test]
    fn listener_sees_events_in_order() {
        let generator = FixedBoardGenerator::new([(0, 0)]);
        let config = generator.config(2).unwrap();
        let mut game = GameState::with_listener(generator, Vec::new(), config).unwrap();

        game.toggle_flag((1, 1));
        game.toggle_flag((1, 1));
        game.reveal_cell((0, 1));
        game.reveal_cell((1, 0));
        game.reveal_cell((1, 1));
        game.reveal_cell((0, 0));

        assert_eq!(
            game.listener().as_slice(),
            &[
                GameEvent::FlagChanged {
                    at: (1, 1),
                    flagged: true,
                    remaining: 0
                },
                GameEvent::FlagChanged {
                    at: (1, 1),
                    flagged: false,
                    remaining: 1
                },
                GameEvent::Revealed {
                    cells: vec![(0, 1)]
                },
                GameEvent::Revealed {
                    cells: vec![(1, 0)]
                },
                GameEvent::Revealed {
                    cells: vec![(1, 1)]
                },
                GameEvent::Won,
            ]
        );
    }

    #[test]
    fn bomb_hit_is_announced() {
        let generator = FixedBoardGenerator::new([(1, 1)]);
        let config = generator.config(3).unwrap();
        let mut events: Vec<GameEvent> = Vec::new();
        let mut game = GameState::with_listener(generator, &mut events, config).unwrap();

        game.reveal_cell((1, 1));
        drop(game);

        assert_eq!(events, vec![GameEvent::BombHit { at: (1, 1) }]);
    }

    #[test]
    fn replay_is_deterministic() {
        let bombs = [(0, 4), (3, 3), (6, 1), (8, 8), (2, 7)];
        let moves = [(0, 0), (8, 0), (5, 5), (1, 8), (4, 4)];

        let play = || {
            let mut game = fixed(9, &bombs);
            moves.map(|pos| coords(&game.reveal_cell(pos)))
        };

        assert_eq!(play(), play());
    }

    #[test]
    fn seeded_games_match() {
        let first = GameState::from_seed(77, Difficulty::Medium.config()).unwrap();
        let second = GameState::from_seed(77, Difficulty::Medium.config()).unwrap();
        assert_eq!(first.snapshot(), second.snapshot());
    }

    #[test]
    fn snapshot_serializes() {
        let game = fixed(2, &[(0, 0)]);

        let json = serde_json::to_value(game.snapshot()).unwrap();

        assert_eq!(json["status"], "Playing");
        assert_eq!(json["remaining_flags"], 1);
        assert_eq!(json["config"]["size"], 2);
    }
}
