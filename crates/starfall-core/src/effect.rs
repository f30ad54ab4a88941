use serde::{Deserialize, Serialize};

use crate::entity::{ActorId, EntityId, TextId};

/// Animation clips the engine can play on the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationClip {
    MoveLeft,
    MoveRight,
    Idle,
}

/// Side-effect requests the game core issues for the engine to execute.
///
/// The engine owns every body, sprite, and text element; the core only asks
/// for changes by handle. Requests are serializable so a host can record or
/// broadcast the effect stream alongside state snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineEffect {
    /// Set the actor's horizontal velocity, and vertical velocity when
    /// `vy` is present. An absent `vy` leaves gravity integration alone.
    SetVelocity {
        actor: ActorId,
        vx: f32,
        vy: Option<f32>,
    },
    PlayAnimation {
        actor: ActorId,
        clip: AnimationClip,
    },
    /// Stop the body colliding and rendering.
    DisableBody(EntityId),
    /// Re-enable a disabled body at the given position.
    EnableBody { entity: EntityId, x: f32, y: f32 },
    /// Create a new hazard body with full rebound off world bounds.
    SpawnHazard { x: f32, y: f32, vx: f32, vy: f32 },
    /// Stop all further physics integration.
    PauseSimulation,
    SetTint {
        actor: ActorId,
        color: u32,
    },
    SetTextVisible {
        text: TextId,
        visible: bool,
    },
    SetScoreText(String),
}
