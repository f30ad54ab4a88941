pub mod effect;
pub mod entity;
pub mod game_trait;
pub mod input;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::collections::HashMap;

    use crate::effect::EngineEffect;
    use crate::entity::{ActorId, CollectibleId, TextId};
    use crate::game_trait::{FrameListener, SessionConfig, WorldHandles};
    use crate::input::{ActorSnapshot, DirectionalInput};

    /// Create a world with `n` collectibles and fixed handle values.
    pub fn make_world(n: usize) -> WorldHandles {
        WorldHandles {
            player: ActorId(1),
            collectibles: (0..n).map(|i| CollectibleId(100 + i as u32)).collect(),
            score_text: TextId(1),
            game_over_text: TextId(2),
        }
    }

    /// Create a SessionConfig with the given seed and no custom settings.
    pub fn default_session(seed: u64) -> SessionConfig {
        SessionConfig {
            seed,
            custom: HashMap::new(),
        }
    }

    /// A grounded player snapshot at the given x position.
    pub fn grounded_at(x: f32) -> ActorSnapshot {
        ActorSnapshot { x, grounded: true }
    }

    // ================================================================
    // Frame Listener Contract Tests
    // ================================================================
    // A generic suite every FrameListener implementation must pass. Game
    // crates call these from their own #[cfg(test)] modules with a
    // concrete, initialized game instance.

    /// After init(), serialize_state() must return non-empty bytes.
    pub fn contract_init_produces_state(game: &mut dyn FrameListener, collectibles: usize) {
        game.init(&make_world(collectibles), &default_session(7));
        assert!(
            !game.serialize_state().is_empty(),
            "serialize_state() must return non-empty bytes after init"
        );
    }

    /// serialize → apply → serialize must be stable after one roundtrip.
    pub fn contract_state_roundtrip_stable(game: &mut dyn FrameListener) {
        let state_a = game.serialize_state();
        game.apply_state(&state_a);
        let state_b = game.serialize_state();
        game.apply_state(&state_b);
        let state_c = game.serialize_state();
        assert_eq!(
            state_b, state_c,
            "State must be stable after serialize→apply→serialize roundtrip"
        );
    }

    /// apply_state() with garbage bytes must not panic and must leave the
    /// game able to serialize.
    pub fn contract_apply_state_garbage_no_panic(game: &mut dyn FrameListener) {
        let garbage: Vec<u8> = vec![0xFF, 0xFE, 0x00, 0x01, 0xAB, 0xCD];
        game.apply_state(&garbage);
        assert!(!game.serialize_state().is_empty());
    }

    /// The first hazard hit must request a pause; further hits and updates
    /// must be inert.
    pub fn contract_game_over_is_terminal(game: &mut dyn FrameListener) {
        let first = game.on_hazard_hit(ActorId(1));
        assert!(
            first
                .iter()
                .any(|e| matches!(e, EngineEffect::PauseSimulation)),
            "first hazard hit must request a simulation pause"
        );
        assert!(game.is_game_over(), "hazard hit must set game over");

        let second = game.on_hazard_hit(ActorId(1));
        assert!(
            second.is_empty(),
            "repeated hazard hit must issue no further effects"
        );

        let after = game.update(&DirectionalInput::default(), &grounded_at(100.0));
        assert!(after.is_empty(), "update must be inert after game over");
    }
}
