// Hide the console window on Windows release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::prelude::*;
use sky_climber::AppPlugin;

fn main() -> AppExit {
    App::new().add_plugins(AppPlugin).run()
}
