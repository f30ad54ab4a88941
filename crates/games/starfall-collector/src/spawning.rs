use rand::Rng;
use rand::rngs::StdRng;

use crate::layout::WORLD_WIDTH;

/// Midpoint used to bias hazard spawns toward the half of the field the
/// player is not in.
pub const FIELD_MIDPOINT: f32 = WORLD_WIDTH / 2.0;
/// Maximum horizontal drift speed of a freshly spawned hazard.
pub const HAZARD_DRIFT_MAX: f32 = 200.0;

/// Pick a spawn X and horizontal velocity for a new hazard.
///
/// The X is uniform over the half of the field opposite the player; the
/// drift velocity is uniform in `[-HAZARD_DRIFT_MAX, HAZARD_DRIFT_MAX]`.
pub fn hazard_spawn(rng: &mut StdRng, player_x: f32) -> (f32, f32) {
    // Sanitize: a non-finite position reads as mid-field, spawning left.
    let player_x = if player_x.is_finite() {
        player_x
    } else {
        FIELD_MIDPOINT
    };

    let x = if player_x < FIELD_MIDPOINT {
        rng.random_range(FIELD_MIDPOINT..WORLD_WIDTH)
    } else {
        rng.random_range(0.0..FIELD_MIDPOINT)
    };
    let vx = rng.random_range(-HAZARD_DRIFT_MAX..=HAZARD_DRIFT_MAX);

    (x, vx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn player_on_left_spawns_right() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let (x, _) = hazard_spawn(&mut rng, 100.0);
            assert!((FIELD_MIDPOINT..WORLD_WIDTH).contains(&x));
        }
    }

    #[test]
    fn player_on_right_spawns_left() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let (x, _) = hazard_spawn(&mut rng, 700.0);
            assert!((0.0..FIELD_MIDPOINT).contains(&x));
        }
    }

    #[test]
    fn player_exactly_at_midpoint_spawns_left() {
        let mut rng = StdRng::seed_from_u64(3);
        let (x, _) = hazard_spawn(&mut rng, FIELD_MIDPOINT);
        assert!((0.0..FIELD_MIDPOINT).contains(&x));
    }

    #[test]
    fn drift_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..200 {
            let (_, vx) = hazard_spawn(&mut rng, 100.0);
            assert!((-HAZARD_DRIFT_MAX..=HAZARD_DRIFT_MAX).contains(&vx));
        }
    }

    #[test]
    fn same_seed_is_reproducible() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(hazard_spawn(&mut a, 100.0), hazard_spawn(&mut b, 100.0));
    }

    #[test]
    fn nan_player_position_still_spawns_in_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let (x, _) = hazard_spawn(&mut rng, f32::NAN);
        assert!((0.0..WORLD_WIDTH).contains(&x));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn spawn_is_always_opposite_the_player(
                seed in any::<u64>(),
                player_x in 0.0f32..WORLD_WIDTH,
            ) {
                let mut rng = StdRng::seed_from_u64(seed);
                let (x, vx) = hazard_spawn(&mut rng, player_x);
                if player_x < FIELD_MIDPOINT {
                    prop_assert!(x >= FIELD_MIDPOINT && x < WORLD_WIDTH);
                } else {
                    prop_assert!(x >= 0.0 && x < FIELD_MIDPOINT);
                }
                prop_assert!(vx >= -HAZARD_DRIFT_MAX && vx <= HAZARD_DRIFT_MAX);
            }
        }
    }
}
