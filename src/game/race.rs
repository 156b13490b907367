//! Race game loop.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{ConfigError, GameConfig, GameError, GameState, PlayerId, Standings};
use crate::dice::{Die, RandomDie, MAX_FACE, MIN_FACE};
use crate::observer::{TurnObserver, TurnReport};
use crate::rules::{TurnEngine, TurnResult};

/// Lifecycle of a race.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players and queue being built. Only observable inside `GameLoop::new`.
    Setup,
    /// Turns are being taken.
    Playing,
    /// Someone reached the final square. Absorbing.
    Finished,
}

/// Final result of a completed race.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub winner: PlayerId,
    pub winner_name: String,
    /// Total turns taken across all players.
    pub turns: u32,
    pub standings: Standings,
}

/// Drives a race from setup to a winner.
///
/// Owns the board, the die, the observer and the only `GameState`.
pub struct GameLoop<D, O> {
    board: Board,
    die: D,
    observer: O,
    state: GameState,
    phase: GamePhase,
}

impl<O: TurnObserver> GameLoop<RandomDie, O> {
    /// Build a race with a random die, seeded from `config.seed` when set.
    pub fn from_config(config: &GameConfig, observer: O) -> Result<Self, ConfigError> {
        let die = match config.seed {
            Some(seed) => RandomDie::seeded(seed),
            None => RandomDie::from_entropy(),
        };
        info!("die seed: {}", die.seed());
        Self::new(config, die, observer)
    }

    /// Seed of the die, for replaying this race.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.die.seed()
    }
}

impl<D: Die, O: TurnObserver> GameLoop<D, O> {
    /// Validate the configuration and set up the race.
    ///
    /// Every player starts on square 0 and the queue follows the order of
    /// `config.player_names`. The returned loop is already `Playing`.
    pub fn new(config: &GameConfig, die: D, observer: O) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut game = Self {
            board: Board::standard(),
            die,
            observer,
            state: GameState::new(config.player_names.iter().cloned()),
            phase: GamePhase::Setup,
        };

        info!(
            "race starting with {} players: {}",
            game.state.player_count(),
            config.player_names.join(", ")
        );
        game.phase = GamePhase::Playing;

        Ok(game)
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }

    /// The player who will act on the next `play_turn`.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.active_player()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.state.turn_number
    }

    #[must_use]
    pub fn standings(&self) -> Standings {
        self.state.standings()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Take the observer back, ending the race object.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Play the front player's turn.
    ///
    /// The player rotates to the back of the queue whatever the outcome. A
    /// winning turn finishes the race and notifies the observer once.
    pub fn play_turn(&mut self) -> Result<TurnResult, GameError> {
        if self.is_finished() {
            return Err(GameError::Finished);
        }

        let player = self.state.queue.front();
        let (name, position) = {
            let p = &self.state.players[player];
            (p.name().to_string(), p.position())
        };

        self.observer.before_roll(player, &name, position);

        let roll = self.die.roll();
        assert!(
            (MIN_FACE..=MAX_FACE).contains(&roll),
            "Die produced {roll}, outside {MIN_FACE}..={MAX_FACE}"
        );

        let result = TurnEngine::new(&self.board).resolve(position, roll);

        self.state.players[player].set_position(result.position);
        self.state.queue.rotate();
        self.state.turn_number += 1;
        trace!("next up: {}", self.state.queue.front());

        debug!(
            "{} rolled {}: {} -> {} ({})",
            name, roll, position, result.position, result.outcome
        );

        let report = TurnReport {
            turn_number: self.state.turn_number,
            player,
            player_name: name.clone(),
            result,
            standings: self.state.standings(),
        };
        self.observer.on_turn(&report);

        if result.outcome.is_win() {
            self.state.winner = Some(player);
            self.phase = GamePhase::Finished;
            info!("{} wins after {} turns", name, self.state.turn_number);
            self.observer.on_game_over(player, &name);
        }

        Ok(result)
    }

    /// Play turns until someone wins.
    pub fn run(&mut self) -> Result<GameSummary, GameError> {
        if self.is_finished() {
            return Err(GameError::Finished);
        }

        while !self.is_finished() {
            self.play_turn()?;
        }

        Ok(self.summary())
    }

    fn summary(&self) -> GameSummary {
        let winner = self
            .state
            .winner
            .expect("Finished race always has a winner");

        GameSummary {
            winner,
            winner_name: self.state.players[winner].name().to_string(),
            turns: self.state.turn_number,
            standings: self.state.standings(),
        }
    }
}
