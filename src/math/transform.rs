use glam::{Mat4, Vec3};

/// Rotation about X, then Y, then Z, angles in degrees (`Rx * Ry * Rz`)
pub fn rotation_xyz(pitch: f32, yaw: f32, roll: f32) -> Mat4 {
    Mat4::from_rotation_x(pitch.to_radians())
        * Mat4::from_rotation_y(yaw.to_radians())
        * Mat4::from_rotation_z(roll.to_radians())
}

pub fn rotation_y(degrees: f32) -> Mat4 {
    Mat4::from_rotation_y(degrees.to_radians())
}

pub fn translation(v: Vec3) -> Mat4 {
    Mat4::from_translation(v)
}

/// Reduces an angle in degrees into `(-360, 360)`, keeping its sign
pub fn wrap_degrees(angle: f32) -> f32 {
    angle % 360.0
}
