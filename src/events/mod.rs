pub mod drag;
pub mod keyboard;
pub mod pointer;

pub use drag::wire_drag_and_drop;
pub use keyboard::wire_camera_keys;
pub use pointer::wire_viewer_pointer;
