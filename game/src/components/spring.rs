use bevy::prelude::*;

pub const BOUNCE_HALF_SECS: f32 = 0.2;
pub const BOUNCE_PEAK_SCALE: f32 = 2.0;

#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component)]
pub struct Spring {
    pub size: Vec2,
    /// Seconds since the last bounce started, `None` when at rest.
    pub bounce: Option<f32>,
}

impl Spring {
    pub fn new(size: Vec2) -> Self {
        Self { size, bounce: None }
    }

    /// Vertical stretch: up to the peak over one half, back down over the next.
    pub fn bounce_scale(&self) -> f32 {
        let Some(t) = self.bounce else { return 1.0; };
        let stretch = BOUNCE_PEAK_SCALE - 1.0;
        if t < BOUNCE_HALF_SECS {
            1.0 + stretch * (t / BOUNCE_HALF_SECS)
        } else if t < BOUNCE_HALF_SECS * 2.0 {
            BOUNCE_PEAK_SCALE - stretch * ((t - BOUNCE_HALF_SECS) / BOUNCE_HALF_SECS)
        } else {
            1.0
        }
    }
}
