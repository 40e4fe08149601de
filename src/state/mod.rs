pub mod gesture;
pub mod viewport;

pub use gesture::{GesturePhase, GestureState, touch_distance};
pub use viewport::{ROOT_TOP_MARGIN, Viewport};
