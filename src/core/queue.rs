//! Turn order.
//!
//! `TurnQueue` is a fixed ring of player ids with a moving head. Popping the
//! front and pushing it to the back is a single head advance, so the ring
//! never reallocates and every id appears exactly once per cycle.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::MAX_PLAYERS;
use super::player::PlayerId;

/// FIFO rotation of player ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnQueue {
    order: SmallVec<[PlayerId; MAX_PLAYERS]>,
    head: usize,
}

impl TurnQueue {
    /// Build the queue in creation order: `Player 1, Player 2, ...`.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");

        Self {
            order: PlayerId::all(player_count).collect(),
            head: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The player whose turn is next.
    #[must_use]
    pub fn front(&self) -> PlayerId {
        self.order[self.head]
    }

    /// Move the front player to the back of the queue.
    pub fn rotate(&mut self) {
        self.head = (self.head + 1) % self.order.len();
    }

    /// Ids in the order they will next act, front first.
    pub fn iter(&self) -> impl Iterator<Item = PlayerId> + '_ {
        let (back, front) = self.order.split_at(self.head);
        front.iter().chain(back.iter()).copied()
    }
}
