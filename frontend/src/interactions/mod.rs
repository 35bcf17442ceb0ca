pub mod anchor;
pub mod menu;
pub mod scroll_effects;
pub mod slider;
pub mod surface;
pub mod timer;
