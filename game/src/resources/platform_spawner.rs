use bevy::prelude::*;
use rand::Rng;

use crate::resources::climb_settings::ClimbSettings;
use crate::resources::spawn_settings::{BlockMaterial, SpawnSettings};

/// Everything needed to spawn one platform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformPlan {
    pub index: u32,
    pub position: Vec2,
    pub gap_after: f32,
    pub moving: bool,
    pub leg_secs: f32,
    pub material: BlockMaterial,
    pub with_spring: bool,
}

/// Running state of procedural generation for one run.
#[derive(Resource, Reflect, Debug)]
#[reflect(Resource)]
pub struct PlatformSpawner {
    pub next_y: f32,
    pub total_blocks: u32,
}

impl Default for PlatformSpawner {
    fn default() -> Self {
        Self::starting_at(SpawnSettings::default().first_platform_y)
    }
}

impl PlatformSpawner {
    pub fn starting_at(first_y: f32) -> Self {
        Self { next_y: first_y, total_blocks: 0 }
    }

    pub fn reset(&mut self, spawn: &SpawnSettings) {
        *self = Self::starting_at(spawn.first_platform_y);
    }

    /// Horizontal range for static platforms, inset from the scene edges.
    pub fn x_bounds(climb: &ClimbSettings, spawn: &SpawnSettings) -> (f32, f32) {
        let half_width = climb.scene_size.x / 2.0;
        let inset = climb.platform_size().x + spawn.edge_padding;
        (-half_width + inset, half_width - inset)
    }

    pub fn plan_next<R: Rng>(
        &mut self,
        rng: &mut R,
        climb: &ClimbSettings,
        spawn: &SpawnSettings,
        score: u32,
        second_of_minute: u32,
    ) -> PlatformPlan {
        self.total_blocks += 1;
        let index = self.total_blocks;

        let gap_after = rng.random_range(spawn.min_gap..=spawn.max_gap);
        let moving = spawn.moving_every.iter().any(|&n| n > 0 && index % n == 0);

        let x = if moving {
            0.0
        } else {
            let (min_x, max_x) = Self::x_bounds(climb, spawn);
            rng.random_range(min_x..=max_x)
        };

        let leg_secs = if moving {
            rng.random_range(spawn.min_leg_secs..=spawn.max_leg_secs)
        } else {
            0.0
        };

        let plan = PlatformPlan {
            index,
            position: Vec2::new(x, self.next_y),
            gap_after,
            moving,
            leg_secs,
            material: BlockMaterial::for_score(score),
            with_spring: !moving && spawn.spring_seconds.contains(&second_of_minute),
        };

        self.next_y += gap_after;
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn plan_many(count: usize, second: u32) -> Vec<PlatformPlan> {
        let climb = ClimbSettings::default();
        let spawn = SpawnSettings::default();
        let mut spawner = PlatformSpawner::default();
        let mut rng = StdRng::seed_from_u64(7);
        (0..count)
            .map(|_| spawner.plan_next(&mut rng, &climb, &spawn, 0, second))
            .collect()
    }

    #[test]
    fn gaps_stay_within_bounds_and_rise() {
        let plans = plan_many(500, 0);
        assert_eq!(plans[0].position.y, 210.0);
        for pair in plans.windows(2) {
            let gap = pair[1].position.y - pair[0].position.y;
            assert!((100.0..=280.0).contains(&gap), "gap {gap} out of range");
            assert_eq!(gap, pair[0].gap_after);
        }
    }

    #[test]
    fn every_seventh_and_fifteenth_platform_moves() {
        let plans = plan_many(105, 0);
        for plan in &plans {
            let expected = plan.index % 7 == 0 || plan.index % 15 == 0;
            assert_eq!(plan.moving, expected, "platform {}", plan.index);
            if plan.moving {
                assert_eq!(plan.position.x, 0.0);
                assert!((0.7..=2.0).contains(&plan.leg_secs));
            }
        }
        assert_eq!(plans.iter().filter(|p| p.moving).count(), 15 + 7 - 1);
    }

    #[test]
    fn static_platforms_stay_inside_spawn_bounds() {
        let (min_x, max_x) =
            PlatformSpawner::x_bounds(&ClimbSettings::default(), &SpawnSettings::default());
        assert_eq!((min_x, max_x), (-260.0, 260.0));
        for plan in plan_many(300, 0).iter().filter(|p| !p.moving) {
            assert!(plan.position.x >= min_x && plan.position.x <= max_x);
        }
    }

    #[test]
    fn springs_only_on_static_blocks_in_spring_seconds() {
        assert!(plan_many(20, 12).iter().all(|p| !p.with_spring));
        let plans = plan_many(20, 30);
        assert!(plans.iter().all(|p| p.with_spring != p.moving));
    }

    #[test]
    fn material_follows_score() {
        let climb = ClimbSettings::default();
        let spawn = SpawnSettings::default();
        let mut spawner = PlatformSpawner::default();
        let mut rng = StdRng::seed_from_u64(1);
        let plan = spawner.plan_next(&mut rng, &climb, &spawn, 230, 0);
        assert_eq!(plan.material, BlockMaterial::Stone);
    }

    #[test]
    fn reset_restarts_sequence() {
        let spawn = SpawnSettings::default();
        let mut spawner = PlatformSpawner { next_y: 9000.0, total_blocks: 44 };
        spawner.reset(&spawn);
        assert_eq!(spawner.next_y, 210.0);
        assert_eq!(spawner.total_blocks, 0);
    }
}
