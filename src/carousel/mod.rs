pub mod controller;
pub mod input;
pub mod layout;
pub mod state;
pub mod timer;

pub use controller::{Carousel, Command};
