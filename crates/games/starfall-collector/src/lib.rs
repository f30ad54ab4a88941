pub mod config;
pub mod layout;
pub mod movement;
pub mod spawning;
pub mod state;

use rand::SeedableRng;
use rand::rngs::StdRng;

use starfall_core::effect::{AnimationClip, EngineEffect};
use starfall_core::entity::{ActorId, CollectibleId, EntityId};
use starfall_core::game_trait::{FrameListener, SessionConfig, WorldHandles};
use starfall_core::input::{ActorSnapshot, DirectionalInput};
use starfall_core::starfall_listener_boilerplate;

use config::CollectorConfig;
use state::GameState;

/// Tint applied to the player sprite on a hazard hit.
const HIT_TINT: u32 = 0xFF0000;

/// The star-collector game: collect falling stars for points, avoid the
/// bouncing hazards that appear after each full clear.
///
/// Owns no engine objects. Every callback answers with effect requests the
/// engine executes against the handles it assigned at scene build time.
pub struct StarCollector {
    config: CollectorConfig,
    state: GameState,
    world: WorldHandles,
    rng: StdRng,
}

impl StarCollector {
    pub fn new() -> Self {
        Self::with_config(CollectorConfig::default())
    }

    pub fn with_config(config: CollectorConfig) -> Self {
        Self {
            config,
            state: GameState::new(layout::COLLECTIBLE_COUNT),
            world: WorldHandles::default(),
            rng: StdRng::seed_from_u64(SessionConfig::default().seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn score_text(&self) -> EngineEffect {
        EngineEffect::SetScoreText(format!("Score: {}", self.state.score))
    }
}

impl Default for StarCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameListener for StarCollector {
    fn init(&mut self, world: &WorldHandles, config: &SessionConfig) {
        self.world = world.clone();
        self.state = GameState::new(world.collectibles.len() as u32);
        self.rng = StdRng::seed_from_u64(config.seed);
    }

    fn update(&mut self, input: &DirectionalInput, player: &ActorSnapshot) -> Vec<EngineEffect> {
        if self.state.game_over {
            return Vec::new();
        }

        let cmd = movement::resolve_movement_with(
            input,
            player.grounded,
            self.config.run_speed,
            self.config.jump_velocity,
        );

        vec![
            EngineEffect::SetVelocity {
                actor: self.world.player,
                vx: cmd.horizontal_velocity,
                vy: cmd.vertical_velocity_override,
            },
            EngineEffect::PlayAnimation {
                actor: self.world.player,
                clip: cmd.animation,
            },
        ]
    }

    fn on_collect(
        &mut self,
        collectible: CollectibleId,
        player: &ActorSnapshot,
    ) -> Vec<EngineEffect> {
        if self.state.game_over {
            return Vec::new();
        }
        if !self.world.collectibles.contains(&collectible) {
            tracing::warn!(?collectible, "collect event for unknown collectible, ignoring");
            return Vec::new();
        }
        if self.state.collected.contains(&collectible) {
            tracing::warn!(
                ?collectible,
                "duplicate collect event for disabled collectible, ignoring"
            );
            return Vec::new();
        }
        if !self.state.decrement_active() {
            // Counter drained but this id not recorded: only a snapshot
            // restore can produce that. Treat it like a duplicate.
            return Vec::new();
        }
        self.state.collected.insert(collectible);

        let mut effects = vec![EngineEffect::DisableBody(EntityId::Collectible(collectible))];
        self.state.add_score(self.config.score_per_collectible);
        effects.push(self.score_text());

        if self.state.active_collectibles == 0 {
            // Full clear: restore the staggered row and send in one more
            // hazard, biased toward the side opposite the player.
            for (i, &id) in self.world.collectibles.iter().enumerate() {
                effects.push(EngineEffect::EnableBody {
                    entity: EntityId::Collectible(id),
                    x: layout::lane_x(i as u32),
                    y: layout::COLLECTIBLE_DROP_Y,
                });
            }
            self.state.reset_active_to_total();
            self.state.collected.clear();

            let (x, vx) = spawning::hazard_spawn(&mut self.rng, player.x);
            effects.push(EngineEffect::SpawnHazard {
                x,
                y: self.config.hazard_spawn_y,
                vx,
                vy: self.config.hazard_fall_vy,
            });
        }

        effects
    }

    fn on_hazard_hit(&mut self, actor: ActorId) -> Vec<EngineEffect> {
        if self.state.game_over {
            return Vec::new();
        }
        self.state.mark_game_over();
        tracing::info!(score = self.state.score, "hazard hit, game over");

        vec![
            EngineEffect::PauseSimulation,
            EngineEffect::SetTint {
                actor,
                color: HIT_TINT,
            },
            EngineEffect::PlayAnimation {
                actor,
                clip: AnimationClip::Idle,
            },
            EngineEffect::SetTextVisible {
                text: self.world.game_over_text,
                visible: true,
            },
        ]
    }

    starfall_listener_boilerplate!(state_type: GameState);
}
