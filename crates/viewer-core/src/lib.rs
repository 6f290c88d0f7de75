pub mod camera;
pub mod config;
pub mod constants;
pub mod drag;
pub mod format;
pub mod gestures;
pub mod intake;
pub mod status;

pub use camera::*;
pub use config::*;
pub use drag::*;
pub use format::*;
pub use gestures::*;
pub use intake::*;
pub use status::*;
