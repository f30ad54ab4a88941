use serde::{Deserialize, Serialize};

/// Engine-assigned handle for the player's physics body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Engine-assigned handle for a collectible body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectibleId(pub u32);

/// Engine-assigned handle for a hazard body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HazardId(pub u32);

/// Engine-assigned handle for a text element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextId(pub u32);

/// Any body handle an effect request can target.
///
/// The game core never dereferences these; it only hands them back to the
/// engine that assigned them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityId {
    Actor(ActorId),
    Collectible(CollectibleId),
    Hazard(HazardId),
}

impl From<ActorId> for EntityId {
    fn from(id: ActorId) -> Self {
        EntityId::Actor(id)
    }
}

impl From<CollectibleId> for EntityId {
    fn from(id: CollectibleId) -> Self {
        EntityId::Collectible(id)
    }
}

impl From<HazardId> for EntityId {
    fn from(id: HazardId) -> Self {
        EntityId::Hazard(id)
    }
}
