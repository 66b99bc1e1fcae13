mod bezier;
mod color;
mod transform;

pub use bezier::{cubic_bezier, CubicBezier};
pub use color::hsv_to_rgb;
pub use transform::{rotation_xyz, rotation_y, translation, wrap_degrees};
