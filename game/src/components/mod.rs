pub mod block;
pub mod camera;
pub mod player;
pub mod session;
pub mod spring;
pub mod ui;
