use bevy::prelude::*;

#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct Block {
    pub size: Vec2,
    /// Set once the player has landed on or passed this block.
    pub scored: bool,
    pub moving: bool,
    pub base_floor: bool,
}

impl Block {
    pub fn platform(size: Vec2, moving: bool) -> Self {
        Self { size, scored: false, moving, base_floor: false }
    }

    pub fn base_floor(size: Vec2) -> Self {
        Self { size, scored: false, moving: false, base_floor: true }
    }

    pub fn top(&self, center_y: f32) -> f32 {
        center_y + self.size.y / 2.0
    }

    /// Claims the point for this block. Returns false for the floor or a scored block.
    pub fn claim_score(&mut self) -> bool {
        if self.scored || self.base_floor {
            return false;
        }
        self.scored = true;
        true
    }
}

/// Side-to-side motion: right, left, left, right around `origin_x`, one leg each.
#[derive(Component, Reflect, Debug)]
#[reflect(Component)]
pub struct Oscillator {
    pub origin_x: f32,
    pub amplitude: f32,
    pub leg_secs: f32,
    pub elapsed: f32,
}

impl Oscillator {
    pub fn offset(&self) -> f32 {
        if self.leg_secs <= 0.0 {
            return 0.0;
        }
        let cycle = self.leg_secs * 4.0;
        let phase = self.elapsed.rem_euclid(cycle) / self.leg_secs;
        let wave = if phase < 1.0 {
            phase
        } else if phase < 3.0 {
            2.0 - phase
        } else {
            phase - 4.0
        };
        wave * self.amplitude
    }

    pub fn x(&self) -> f32 {
        self.origin_x + self.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oscillator(elapsed: f32) -> Oscillator {
        Oscillator { origin_x: 0.0, amplitude: 300.0, leg_secs: 1.0, elapsed }
    }

    #[test]
    fn oscillation_follows_right_left_left_right() {
        let samples: Vec<f32> = [0.0, 0.5, 1.0, 2.0, 3.0, 3.5, 4.0]
            .iter()
            .map(|&t| oscillator(t).offset())
            .collect();
        let expected = [0.0, 150.0, 300.0, 0.0, -300.0, -150.0, 0.0];
        for (got, want) in samples.iter().zip(expected) {
            assert!((got - want).abs() < 1e-3, "{got} != {want}");
        }
    }

    #[test]
    fn base_floor_never_scores() {
        let mut floor = Block::base_floor(Vec2::new(750.0, 300.0));
        assert!(!floor.claim_score());

        let mut block = Block::platform(Vec2::new(75.0, 30.0), false);
        assert!(block.claim_score());
        assert!(!block.claim_score());
    }
}
