use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::effect::EngineEffect;
use crate::entity::{ActorId, CollectibleId, TextId};
use crate::input::{ActorSnapshot, DirectionalInput};

/// Core trait a Starfall game implements so an engine can drive it.
///
/// The engine owns the frame loop, physics, rendering, and input polling;
/// the game only holds session state and answers each callback with the
/// effect requests the engine should execute.
pub trait FrameListener: Send + Sync {
    /// Called once after the engine has built the scene, handing over the
    /// handles it assigned.
    fn init(&mut self, world: &WorldHandles, config: &SessionConfig);

    /// Called once per simulated frame with the current key snapshot and
    /// the engine's view of the player body.
    fn update(&mut self, input: &DirectionalInput, player: &ActorSnapshot) -> Vec<EngineEffect>;

    /// Called when the player overlaps a collectible.
    fn on_collect(
        &mut self,
        collectible: CollectibleId,
        player: &ActorSnapshot,
    ) -> Vec<EngineEffect>;

    /// Called when the player collides with a hazard.
    fn on_hazard_hit(&mut self, actor: ActorId) -> Vec<EngineEffect>;

    /// Serialize the session state for broadcast or recording.
    fn serialize_state(&self) -> Vec<u8>;

    /// Apply a state snapshot received from an authoritative host.
    fn apply_state(&mut self, state: &[u8]);

    /// Whether the terminal game-over state has been reached.
    fn is_game_over(&self) -> bool;
}

/// Handles the engine assigned when building the scene.
///
/// `collectibles` is in lane order: index `i` is the collectible that drops
/// into lane `i`, which is where it gets re-enabled on a full clear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldHandles {
    pub player: ActorId,
    pub collectibles: Vec<CollectibleId>,
    pub score_text: TextId,
    pub game_over_text: TextId,
}

/// Configuration for one game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for the game's deterministic RNG.
    pub seed: u64,
    /// Game-specific settings.
    pub custom: HashMap<String, serde_json::Value>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            custom: HashMap::new(),
        }
    }
}

/// Generates the `FrameListener` boilerplate methods that are identical
/// across games: `serialize_state`, `apply_state`, `is_game_over`.
///
/// Requires the implementing struct to have a `state: $StateType` field,
/// and `$StateType` to have a `game_over: bool` field.
#[macro_export]
macro_rules! starfall_listener_boilerplate {
    (state_type: $StateType:ty) => {
        fn serialize_state(&self) -> Vec<u8> {
            rmp_serde::to_vec(&self.state).expect("game state serialization must succeed")
        }

        fn apply_state(&mut self, state: &[u8]) {
            if let Ok(s) = rmp_serde::from_slice::<$StateType>(state) {
                self.state = s;
            }
        }

        fn is_game_over(&self) -> bool {
            self.state.game_over
        }
    };
}
