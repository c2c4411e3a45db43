use bevy::prelude::*;

/// The player came down onto the top edge of a block.
#[derive(Message, Debug, Clone, Copy)]
pub struct PlatformContact {
    pub block: Entity,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct SpringContact {
    pub spring: Entity,
}
