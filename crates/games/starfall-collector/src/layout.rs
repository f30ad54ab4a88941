//! Fixed scene layout for the 800x600 level.
//!
//! The engine adapter reads this data when building the scene: static
//! platform bodies, the player spawn, collectible lanes, and text placement.
//! The game core itself only uses the lane positions (for re-enabling
//! collectibles on a full clear) and the world width (for hazard spawn
//! bias); everything else is here so the scene is described in one place.

use serde::{Deserialize, Serialize};

/// World width in pixels.
pub const WORLD_WIDTH: f32 = 800.0;
/// World height in pixels.
pub const WORLD_HEIGHT: f32 = 600.0;
/// Downward gravity applied to dynamic bodies (units/s^2).
pub const GRAVITY_Y: f32 = 300.0;

/// Player spawn position.
pub const PLAYER_SPAWN_X: f32 = 100.0;
pub const PLAYER_SPAWN_Y: f32 = 450.0;
/// Slight rebound after landing.
pub const PLAYER_BOUNCE: f32 = 0.2;

/// Number of collectibles placed at level start.
pub const COLLECTIBLE_COUNT: u32 = 12;
/// X position of the first collectible lane.
const LANE_ORIGIN_X: f32 = 12.0;
/// Step between adjacent lanes.
const LANE_STEP_X: f32 = 70.0;
/// Y position collectibles drop in from, both at level start and when
/// re-enabled after a full clear.
pub const COLLECTIBLE_DROP_Y: f32 = 0.0;
/// Per-collectible bounce factor range, drawn by the engine.
pub const COLLECTIBLE_BOUNCE_MIN: f32 = 0.4;
pub const COLLECTIBLE_BOUNCE_MAX: f32 = 0.8;

/// Score text placement (top-left).
pub const SCORE_TEXT_X: f32 = 16.0;
pub const SCORE_TEXT_Y: f32 = 16.0;
/// Game-over text placement (centered).
pub const GAME_OVER_TEXT_X: f32 = 400.0;
pub const GAME_OVER_TEXT_Y: f32 = 300.0;

/// Y position hazards spawn at (just below the top edge).
pub const HAZARD_SPAWN_Y: f32 = 16.0;
/// Initial downward velocity of a spawned hazard.
pub const HAZARD_FALL_VY: f32 = 20.0;

/// Axis-aligned platform placement: center position plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PlatformSpec {
    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Static platforms: one full-width ground slab and three floating ledges.
pub fn platforms() -> Vec<PlatformSpec> {
    vec![
        // Ground: the 400x32 slab at double scale.
        PlatformSpec {
            x: 400.0,
            y: 568.0,
            width: 800.0,
            height: 64.0,
        },
        PlatformSpec {
            x: 600.0,
            y: 400.0,
            width: 400.0,
            height: 32.0,
        },
        PlatformSpec {
            x: 50.0,
            y: 250.0,
            width: 400.0,
            height: 32.0,
        },
        PlatformSpec {
            x: 750.0,
            y: 200.0,
            width: 400.0,
            height: 32.0,
        },
    ]
}

/// X position of collectible lane `i`. Lanes form a staggered row across
/// the top of the world.
pub fn lane_x(i: u32) -> f32 {
    LANE_ORIGIN_X + LANE_STEP_X * i as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lanes_are_staggered_by_seventy() {
        assert_eq!(lane_x(0), 12.0);
        assert_eq!(lane_x(1), 82.0);
        assert_eq!(lane_x(2), 152.0);
        assert_eq!(lane_x(11), 782.0);
    }

    #[test]
    fn all_lanes_fit_in_world() {
        for i in 0..COLLECTIBLE_COUNT {
            let x = lane_x(i);
            assert!(
                x > 0.0 && x < WORLD_WIDTH,
                "lane {i} at x={x} outside world"
            );
        }
    }

    #[test]
    fn ground_spans_full_width() {
        let ground = platforms()[0];
        assert_eq!(ground.left(), 0.0);
        assert_eq!(ground.right(), WORLD_WIDTH);
    }

    #[test]
    fn ledges_sit_above_ground() {
        let specs = platforms();
        let ground_top = specs[0].top();
        for ledge in &specs[1..] {
            assert!(
                ledge.bottom() < ground_top,
                "ledge at ({}, {}) overlaps ground",
                ledge.x,
                ledge.y
            );
        }
    }

    #[test]
    fn player_spawns_inside_world() {
        assert!(PLAYER_SPAWN_X > 0.0 && PLAYER_SPAWN_X < WORLD_WIDTH);
        assert!(PLAYER_SPAWN_Y > 0.0 && PLAYER_SPAWN_Y < WORLD_HEIGHT);
    }
}
