use serde::{Deserialize, Serialize};

/// Directional key snapshot, sampled once per frame by the engine.
///
/// Transient — handed to the game each frame, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

/// The engine's observed view of the player body at callback time.
///
/// The game never reads engine entities directly, so the engine passes the
/// observations the game needs alongside each callback: the horizontal
/// position (hazard spawns are biased away from it) and whether the body is
/// resting on a surface (jumps only fire while grounded).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    pub x: f32,
    pub grounded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_has_no_keys_held() {
        let input = DirectionalInput::default();
        assert!(!input.left && !input.right && !input.up);
    }

    #[test]
    fn input_msgpack_roundtrip() {
        let input = DirectionalInput {
            left: true,
            right: false,
            up: true,
        };
        let encoded = rmp_serde::to_vec(&input).unwrap();
        let decoded: DirectionalInput = rmp_serde::from_slice(&encoded).unwrap();
        assert_eq!(decoded, input);
    }
}
