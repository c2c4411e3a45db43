use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum BlockMaterial {
    Grass,
    Wood,
    Stone,
    Brick,
    Iron,
}

impl BlockMaterial {
    pub const CYCLE: [BlockMaterial; 5] = [
        BlockMaterial::Grass,
        BlockMaterial::Wood,
        BlockMaterial::Stone,
        BlockMaterial::Brick,
        BlockMaterial::Iron,
    ];

    /// Platforms change material every hundred points.
    pub fn for_score(score: u32) -> Self {
        Self::CYCLE[(score / 100) as usize % Self::CYCLE.len()]
    }

    pub fn color(self) -> Color {
        match self {
            BlockMaterial::Grass => Color::srgb(0.35, 0.7, 0.25),
            BlockMaterial::Wood => Color::srgb(0.6, 0.4, 0.2),
            BlockMaterial::Stone => Color::srgb(0.55, 0.55, 0.55),
            BlockMaterial::Brick => Color::srgb(0.7, 0.3, 0.25),
            BlockMaterial::Iron => Color::srgb(0.75, 0.78, 0.82),
        }
    }
}

/// Procedural platform rules.
#[derive(Resource, Reflect, Debug)]
#[reflect(Resource)]
pub struct SpawnSettings {
    pub min_gap: f32,
    pub max_gap: f32,
    pub first_platform_y: f32,
    pub live_blocks: usize,
    /// Every n-th platform oscillates; any listed cadence qualifies.
    pub moving_every: Vec<u32>,
    pub edge_padding: f32,
    pub min_leg_secs: f32,
    pub max_leg_secs: f32,
    /// Seconds of the run clock's minute during which static blocks carry a spring.
    pub spring_seconds: Vec<u32>,
    pub spring_size: f32,
    pub spring_lift: f32,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            min_gap: 100.0,
            max_gap: 280.0,
            first_platform_y: 210.0,
            live_blocks: 12,
            moving_every: vec![7, 15],
            edge_padding: 40.0,
            min_leg_secs: 0.7,
            max_leg_secs: 2.0,
            spring_seconds: vec![30, 58],
            spring_size: 32.0,
            spring_lift: 32.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_cycles_every_hundred_points() {
        assert_eq!(BlockMaterial::for_score(0), BlockMaterial::Grass);
        assert_eq!(BlockMaterial::for_score(99), BlockMaterial::Grass);
        assert_eq!(BlockMaterial::for_score(100), BlockMaterial::Wood);
        assert_eq!(BlockMaterial::for_score(450), BlockMaterial::Iron);
        assert_eq!(BlockMaterial::for_score(500), BlockMaterial::Grass);
    }
}
