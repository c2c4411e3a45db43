#![allow(unused_imports)]

use bevy::prelude::*;

mod components;
mod plugins;
mod resources;
mod states;

mod prelude {
    pub use super::*;
    pub use {components::*, plugins::*, resources::*, states::*};
}

pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        // Defaults first: every other plugin expects logging, states and assets
        app.add_plugins(plugins::defaults::plugin);
        app.add_plugins((
            plugins::game::plugin,
            plugins::camera::plugin,
            plugins::input::plugin,
            plugins::physics::plugin,
            plugins::platforms::plugin,
            plugins::player::plugin,
            plugins::hud::plugin,
            plugins::audio::plugin,
            plugins::records::plugin,
            plugins::leaderboard::plugin,
            plugins::menu::plugin,
            plugins::pause::plugin,
            plugins::reset::plugin,
        ));
        #[cfg(feature="dev")]
        app.add_plugins(plugins::debug::plugin);
    }
}
