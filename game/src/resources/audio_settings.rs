use bevy::prelude::*;

#[derive(Resource, Reflect, Debug)]
#[reflect(Resource)]
pub struct AudioSettings {
    pub master_volume: f32,
    pub step: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.5,
            step: 0.1,
        }
    }
}

impl AudioSettings {
    /// Moves the volume by `steps` increments, snapped to the step grid and clamped to 0..=1.
    pub fn nudge(&mut self, steps: i32) {
        let raw = self.master_volume + self.step * steps as f32;
        let snapped = (raw / self.step).round() * self.step;
        self.master_volume = snapped.clamp(0.0, 1.0);
    }

    pub fn percent(&self) -> u32 {
        (self.master_volume * 100.0).round() as u32
    }
}
