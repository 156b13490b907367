//! Game state and standings.
//!
//! ## GameState
//!
//! Everything a running race needs:
//! - Roster (names and squares)
//! - Turn queue
//! - Turn counter
//! - Winner, once there is one
//!
//! ## Standings
//!
//! A read-only snapshot of every player's square in creation order, handed
//! to observers after each turn.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, Roster};
use super::queue::TurnQueue;

/// Complete state of one race. Owned by the game loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Players in creation order.
    pub players: Roster,

    /// Who acts next.
    pub queue: TurnQueue,

    /// Turns resolved so far (starts at 0).
    pub turn_number: u32,

    /// Set the moment a player reaches the final square.
    pub winner: Option<PlayerId>,
}

impl GameState {
    /// Create a fresh state with every player on square 0.
    pub fn new<I, S>(player_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players = Roster::new(player_names);
        let queue = TurnQueue::new(players.len());

        Self {
            players,
            queue,
            turn_number: 0,
            winner: None,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn is next.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.queue.front()
    }

    /// Snapshot all positions.
    #[must_use]
    pub fn standings(&self) -> Standings {
        Standings {
            entries: self
                .players
                .iter()
                .map(|(id, p)| StandingEntry {
                    player: id,
                    name: p.name().to_string(),
                    position: p.position(),
                })
                .collect(),
        }
    }
}

/// One row of the standings table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub player: PlayerId,
    pub name: String,
    pub position: u8,
}

/// Every player's square, in creation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub entries: Vec<StandingEntry>,
}

impl Standings {
    /// Position of one player.
    #[must_use]
    pub fn position_of(&self, player: PlayerId) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.player == player)
            .map(|e| e.position)
    }

    /// The player furthest along. Ties go to the earlier-created player.
    #[must_use]
    pub fn leader(&self) -> Option<&StandingEntry> {
        self.entries
            .iter()
            .rev()
            .max_by_key(|e| e.position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StandingEntry> {
        self.entries.iter()
    }
}

impl std::fmt::Display for Standings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Current Standings:")?;
        for entry in &self.entries {
            writeln!(f, "  - {}: {}", entry.name, entry.position)?;
        }
        Ok(())
    }
}
