pub mod clock;
pub mod input_adapter;

pub use clock::{AnimationClock, Clock};
pub use input_adapter::WinitInput;
