use bevy::prelude::*;

pub const MAX_USERNAME_LEN: usize = 12;

/// Name typed on the main menu, mirrored into the score record when it is not blank.
#[derive(Resource, Reflect, Debug)]
#[reflect(Resource)]
pub struct PlayerProfile {
    pub username: String,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self { username: "".to_string() }
    }
}

impl PlayerProfile {
    /// Appends printable characters until the name is full. Returns whether anything changed.
    pub fn push_chars(&mut self, input: &str) -> bool {
        let mut changed = false;
        for c in input.chars() {
            if !c.is_control() && self.username.chars().count() < MAX_USERNAME_LEN {
                self.username.push(c);
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_chars_stops_at_limit() {
        let mut profile = PlayerProfile::default();
        assert!(profile.push_chars("climber_supreme_99"));
        assert_eq!(profile.username, "climber_supr");
        assert!(!profile.push_chars("x"));
    }

    #[test]
    fn push_chars_skips_control_characters() {
        let mut profile = PlayerProfile::default();
        assert!(profile.push_chars("a\tb\n"));
        assert_eq!(profile.username, "ab");
    }
}
