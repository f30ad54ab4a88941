use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use starfall_core::entity::CollectibleId;

/// Mutable session state: score, game-over flag, live collectible count.
///
/// Mutated only from the event handlers in `lib.rs`, synchronously, on the
/// engine's single simulation thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    pub game_over: bool,
    pub active_collectibles: u32,
    pub total_collectibles: u32,
    /// Collectibles disabled since the last full-clear reset. Part of the
    /// snapshot so a restored session cannot re-score one of them.
    pub collected: HashSet<CollectibleId>,
}

impl GameState {
    pub fn new(total_collectibles: u32) -> Self {
        Self {
            score: 0,
            game_over: false,
            active_collectibles: total_collectibles,
            total_collectibles,
            collected: HashSet::new(),
        }
    }

    /// Add points. No upper bound beyond saturation.
    pub fn add_score(&mut self, n: u32) {
        self.score = self.score.saturating_add(n);
    }

    /// Idempotent — marking twice has no additional effect.
    pub fn mark_game_over(&mut self) {
        self.game_over = true;
    }

    /// Decrement the live collectible count. Returns `false` when the count
    /// is already zero, which means the engine delivered a collect event we
    /// have no record of; the count is clamped rather than wrapping.
    pub fn decrement_active(&mut self) -> bool {
        if self.active_collectibles == 0 {
            tracing::warn!("collect event with zero active collectibles, ignoring");
            return false;
        }
        self.active_collectibles -= 1;
        true
    }

    /// Restore the live count to the placed total (full-clear reset).
    pub fn reset_active_to_total(&mut self) {
        self.active_collectibles = self.total_collectibles;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_clean() {
        let state = GameState::new(12);
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
        assert_eq!(state.active_collectibles, 12);
        assert_eq!(state.total_collectibles, 12);
        assert!(state.collected.is_empty());
    }

    #[test]
    fn score_accumulates() {
        let mut state = GameState::new(12);
        state.add_score(10);
        state.add_score(10);
        assert_eq!(state.score, 20);
    }

    #[test]
    fn score_saturates_at_max() {
        let mut state = GameState::new(12);
        state.score = u32::MAX - 5;
        state.add_score(10);
        assert_eq!(state.score, u32::MAX);
    }

    #[test]
    fn mark_game_over_is_idempotent() {
        let mut state = GameState::new(12);
        state.mark_game_over();
        state.mark_game_over();
        assert!(state.game_over);
    }

    #[test]
    fn decrement_clamps_at_zero() {
        let mut state = GameState::new(1);
        assert!(state.decrement_active());
        assert_eq!(state.active_collectibles, 0);
        assert!(!state.decrement_active(), "decrement at zero must fail");
        assert_eq!(state.active_collectibles, 0, "count must never go negative");
    }

    #[test]
    fn reset_restores_total() {
        let mut state = GameState::new(12);
        for _ in 0..12 {
            state.decrement_active();
        }
        assert_eq!(state.active_collectibles, 0);
        state.reset_active_to_total();
        assert_eq!(state.active_collectibles, 12);
    }
}
