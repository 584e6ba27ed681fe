use crate::error::Result;
use crate::{Board, Cell, GameConfig, Lives, Position, Score, ScoringRules};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub fn is_finished(self) -> bool {
        matches!(self, GameState::Won | GameState::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reveal,
    Flag,
}

/// An immutable game snapshot.
///
/// Actions never touch the receiver: [`Game::reveal_at`] and
/// [`Game::toggle_flag_at`] clone the whole game, apply the change to the
/// clone and return it. Holding on to an older snapshot is always safe.
///
/// Invalid input is not an error. Out of range coordinates, actions on cells
/// that do not accept them and any action after the game has ended return an
/// unchanged copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    board: Board,
    lives: Lives,
    score: Score,
    scoring: ScoringRules,
    state: GameState,
}

impl Game {
    /// Builds a random game with the default scoring rules.
    pub fn create(rows: u32, cols: u32, mines: u32, lives: u32, hidden_lives: u32) -> Result<Self> {
        Self::from_config(&GameConfig::new(rows, cols, mines, lives, hidden_lives))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::from_config_with_rng(config, &mut rand::thread_rng())
    }

    /// Builds a random game drawing every placement from `rng`, so a seeded
    /// generator always yields the same board.
    pub fn from_config_with_rng<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let mut board = Board::new(config.rows, config.cols)?;
        board.place_mines(rng, config.mines)?;
        let lives_placed = board.place_lives(rng, config.hidden_lives);
        board.compute_neighbor_counts();

        log::debug!(
            "Generated {}x{} board with {} mines and {} hidden lives",
            config.rows,
            config.cols,
            board.mines_count(),
            lives_placed
        );

        Ok(Self::assemble(board, config))
    }

    /// Builds a game with mines and hidden lives at known positions.
    ///
    /// `config.mines` and `config.hidden_lives` are ignored; the layout
    /// decides both.
    pub fn from_layout(
        config: &GameConfig,
        mines: &[Position],
        life_cells: &[Position],
    ) -> Result<Self> {
        let mut board = Board::new(config.rows, config.cols)?;
        for &pos in mines {
            board.set_mine_at(pos)?;
        }
        for &pos in life_cells {
            board.set_life_at(pos)?;
        }
        board.compute_neighbor_counts();

        Ok(Self::assemble(board, config))
    }

    fn assemble(board: Board, config: &GameConfig) -> Self {
        Self {
            board,
            lives: Lives::new(config.lives),
            score: Score::default(),
            scoring: config.scoring,
            state: GameState::Playing,
        }
    }

    pub fn reveal_at(&self, pos: Position) -> Self {
        let mut next = self.clone();
        next.reveal(pos);
        next
    }

    pub fn toggle_flag_at(&self, pos: Position) -> Self {
        let mut next = self.clone();
        next.toggle_flag(pos);
        next
    }

    pub fn apply(&self, pos: Position, action: Action) -> Self {
        match action {
            Action::Reveal => self.reveal_at(pos),
            Action::Flag => self.toggle_flag_at(pos),
        }
    }

    fn reveal(&mut self, pos: Position) {
        if self.state != GameState::Playing {
            return;
        }

        let Some(cell) = self.board.get(pos).copied() else {
            return;
        };
        if cell.is_flagged() || cell.is_revealed() {
            return;
        }

        if cell.is_mine() {
            self.detonate(pos);
            return;
        }

        if cell.neighbor_mines() == 0 {
            self.flood_fill(pos);
        } else {
            self.collect(pos);
        }

        if self.check_victory() {
            log::info!("Game won with score {}", self.score.value());
            self.state = GameState::Won;
        }
    }

    fn detonate(&mut self, pos: Position) {
        if let Some(cell) = self.board.get_mut(pos) {
            cell.reveal();
        }
        self.score.subtract(self.scoring.detonation_penalty);

        // Costs one life if any remain; an already empty pool stays empty.
        self.lives.lose_life();
        log::debug!("Mine hit at {:?}, {} lives left", pos, self.lives.count());

        if self.lives.is_empty() {
            log::info!("Game lost with score {}", self.score.value());
            self.state = GameState::Lost;
            self.board.reveal_all_mines();
        }
    }

    /// Reveals one safe cell and pays out for it.
    fn collect(&mut self, pos: Position) {
        let Some(cell) = self.board.get_mut(pos) else {
            return;
        };
        cell.reveal();
        let is_life = cell.is_life();

        self.score.add(self.scoring.reveal_points);
        if is_life {
            log::debug!("Picked up a life at {:?}", pos);
            self.lives.gain_life();
            self.score.add(self.scoring.life_bonus);
        }
    }

    fn flood_fill(&mut self, origin: Position) {
        let mut stack = vec![origin];
        let mut revealed = 0usize;

        while let Some(pos) = stack.pop() {
            let Some(cell) = self.board.get(pos) else {
                continue;
            };
            if cell.is_revealed() || cell.is_flagged() || cell.is_mine() {
                continue;
            }

            // numbered cells border the region and do not expand it
            let expands = cell.neighbor_mines() == 0;
            self.collect(pos);
            revealed += 1;

            if expands {
                stack.extend(pos.neighbors());
            }
        }

        log::trace!("Flood fill from {:?} revealed {} cells", origin, revealed);
    }

    fn toggle_flag(&mut self, pos: Position) {
        if self.state != GameState::Playing {
            return;
        }

        let bonus = self.scoring.first_flag_bonus;
        let Some(cell) = self.board.get_mut(pos) else {
            return;
        };
        if cell.is_revealed() {
            return;
        }

        cell.toggle_flag();
        if bonus > 0 && cell.is_flagged() && cell.is_mine() && !cell.flag_scored() {
            cell.mark_flag_scored();
            self.score.add(bonus);
        }
    }

    /// True when every non-mine cell is revealed, whatever the flags say.
    pub fn check_victory(&self) -> bool {
        self.board.all_safe_revealed()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn rows(&self) -> u32 {
        self.board.rows()
    }

    pub fn cols(&self) -> u32 {
        self.board.cols()
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (u32, u32) {
        self.board.dimensions()
    }

    pub fn mines(&self) -> u32 {
        self.board.mines_count()
    }

    pub fn lives(&self) -> &Lives {
        &self.lives
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn scoring(&self) -> &ScoringRules {
        &self.scoring
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.board.get(pos)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.board.iter()
    }

    pub fn flags_placed(&self) -> u32 {
        self.board.flagged_count()
    }

    /// Mines minus flags. Negative when the player over-flags.
    pub fn mines_remaining(&self) -> i64 {
        i64::from(self.mines()) - i64::from(self.flags_placed())
    }

    pub fn safe_cells_remaining(&self) -> u32 {
        self.board.hidden_safe_count()
    }
}
