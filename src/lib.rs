pub mod app;
pub mod buttons;
pub mod controller;
pub mod error;
pub mod render;

pub use app::run;
pub use buttons::PadButton;
pub use controller::{Registry, Stick};
pub use error::{Result, VizError};
