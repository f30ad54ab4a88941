use starfall_core::effect::AnimationClip;
use starfall_core::input::DirectionalInput;

/// Horizontal run speed (units/s).
pub const RUN_SPEED: f32 = 260.0;
/// Jump impulse. Negative is upward: the world uses screen coordinates
/// with Y increasing downward.
pub const JUMP_VELOCITY: f32 = -500.0;

/// Velocity and animation the engine should apply for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementCommand {
    pub horizontal_velocity: f32,
    pub animation: AnimationClip,
    /// Present only when a jump fires this frame. When absent the engine's
    /// gravity integration keeps the current vertical velocity.
    pub vertical_velocity_override: Option<f32>,
}

/// Resolve one frame of directional input into a movement command.
///
/// Left wins over right when both keys are held. A jump fires only when the
/// up key is held while the player body rests on a surface.
pub fn resolve_movement(input: &DirectionalInput, grounded: bool) -> MovementCommand {
    resolve_movement_with(input, grounded, RUN_SPEED, JUMP_VELOCITY)
}

/// `resolve_movement` with tunable speeds (see `CollectorConfig`).
pub fn resolve_movement_with(
    input: &DirectionalInput,
    grounded: bool,
    run_speed: f32,
    jump_velocity: f32,
) -> MovementCommand {
    let (horizontal_velocity, animation) = if input.left {
        (-run_speed, AnimationClip::MoveLeft)
    } else if input.right {
        (run_speed, AnimationClip::MoveRight)
    } else {
        (0.0, AnimationClip::Idle)
    };

    let vertical_velocity_override = (input.up && grounded).then_some(jump_velocity);

    MovementCommand {
        horizontal_velocity,
        animation,
        vertical_velocity_override,
    }
}
