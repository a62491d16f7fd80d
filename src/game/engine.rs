use std::time::Duration;

use log::{debug, info};

use super::board::{Board, Symbol};
use super::player::Player;
use super::state::{GameOutcome, GameState};
use super::win::find_winner;
use crate::ai::RandomAgent;
use crate::config::GameConfig;
use crate::console::render::{render_board, render_outcome};
use crate::console::{pacing, ConsoleOutput, NoDelay, Output, Pacer};
use crate::error::GameError;

/// One game of Connect Four, from setup to final result.
///
/// Players take turns in the order they were added. After every move the whole
/// board is printed and scanned for a winner; the game ends on the first win or
/// when the board fills up.
pub struct ConnectFourGame {
    board: Board,
    players: Vec<Player>,
    state: GameState,
    current_player: usize,
    winner: Option<Symbol>,
    moves_played: usize,
    output: Box<dyn Output>,
    pacer: Box<dyn Pacer>,
}

impl ConnectFourGame {
    /// 7x6 board with players X and O
    pub fn standard() -> Self {
        Self::new(super::board::STANDARD_WIDTH, super::board::STANDARD_HEIGHT)
    }

    /// Board of the given size with random players X and O, X moving first.
    pub fn new(width: usize, height: usize) -> Self {
        let mut game = Self::empty(width, height);
        game.players.push(Player::new(Symbol::X));
        game.players.push(Player::new(Symbol::O));
        game
    }

    /// Board of the given size and no players yet.
    pub fn empty(width: usize, height: usize) -> Self {
        ConnectFourGame {
            board: Board::new(width, height),
            players: Vec::new(),
            state: GameState::NotStarted,
            current_player: 0,
            winner: None,
            moves_played: 0,
            output: Box::new(ConsoleOutput),
            pacer: Box::new(NoDelay),
        }
    }

    /// Standard two-player game sized and paced from configuration. With a
    /// seed, player `i` draws from `seed + i`.
    pub fn from_config(config: &GameConfig) -> Self {
        let mut game = Self::empty(config.width, config.height);
        for (i, symbol) in [Symbol::X, Symbol::O].into_iter().enumerate() {
            let agent = match config.seed {
                Some(seed) => RandomAgent::with_seed(seed.wrapping_add(i as u64)),
                None => RandomAgent::new(),
            };
            game.players.push(Player::with_agent(symbol, agent));
        }
        game.pacer = pacing::pacer_for(Duration::from_millis(config.turn_delay_ms));
        game
    }

    pub fn with_output(mut self, output: impl Output + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    /// Add a player to the end of the turn order.
    pub fn add_player(&mut self, player: Player) -> Result<(), GameError> {
        if self.state != GameState::NotStarted {
            return Err(GameError::InvalidState(
                "cannot add players in the middle of a game".into(),
            ));
        }
        self.players.push(player);
        Ok(())
    }

    /// Play the game to completion and report the result.
    pub fn start(&mut self) -> Result<GameOutcome, GameError> {
        if self.state != GameState::NotStarted {
            return Err(GameError::InvalidState("game has already been started".into()));
        }
        if self.players.is_empty() {
            return Err(GameError::InvalidState(
                "cannot start a game without players".into(),
            ));
        }

        self.output.print("Welcome to Connect 4\n\n");
        self.state = GameState::InProgress;
        self.current_player = 0;
        info!(
            "starting {}x{} game with {} players",
            self.board.width(),
            self.board.height(),
            self.players.len()
        );
        self.print_board();

        while self.state != GameState::Complete {
            if self.board.is_full() {
                self.state = GameState::Complete;
                continue;
            }

            self.take_turn()?;
            self.print_board();

            self.winner = find_winner(&self.board);
            if self.winner.is_some() {
                self.state = GameState::Complete;
                continue;
            }

            self.current_player = (self.current_player + 1) % self.players.len();
            self.pacer.pause();
        }

        let outcome = self.outcome().unwrap_or(GameOutcome::Draw);
        info!("game over after {} moves: {:?}", self.moves_played, outcome);
        self.output.print(&render_outcome(outcome));
        self.output.print("\n");
        Ok(outcome)
    }

    /// Let the active player drop one piece.
    fn take_turn(&mut self) -> Result<(), GameError> {
        let open = self.board.open_columns();
        let player = &mut self.players[self.current_player];
        let column = player.select_column(&open);
        let symbol = player.symbol();

        if !open.contains(&column) {
            let err = GameError::IllegalMove { column, open };
            self.output.error(&format!("{err}\n"));
            return Err(err);
        }

        self.board.add_piece(column, symbol.to_cell())?;
        self.moves_played += 1;
        debug!(
            "move {}: player {} drops in column {}",
            self.moves_played, symbol, column
        );
        Ok(())
    }

    fn print_board(&mut self) {
        let rendered = render_board(&self.board);
        self.output.print(&rendered);
        self.output.print("\n");
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Player whose turn it is (or whose move ended the game)
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player)
    }

    pub fn winner(&self) -> Option<Symbol> {
        self.winner
    }

    /// `None` until the game is complete
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.state.is_terminal() {
            return None;
        }
        Some(match self.winner {
            Some(symbol) => GameOutcome::Winner(symbol),
            None => GameOutcome::Draw,
        })
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }
}

impl Default for ConnectFourGame {
    fn default() -> Self {
        Self::standard()
    }
}
