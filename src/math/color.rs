/// Converts an HSV triple to linear RGB.
///
/// `hue` is in degrees and wraps into `[0, 360)`; saturation and value are
/// expected in `[0, 1]`.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [f32; 3] {
    let c = value * saturation;
    let h_prime = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = value - c;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 0.01)
    }

    #[test]
    fn test_hsv_to_rgb_red() {
        assert!(close(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_hsv_to_rgb_blue() {
        assert!(close(hsv_to_rgb(240.0, 1.0, 1.0), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_hsv_to_rgb_wraps_hue() {
        assert!(close(hsv_to_rgb(480.0, 1.0, 1.0), hsv_to_rgb(120.0, 1.0, 1.0)));
        assert!(close(hsv_to_rgb(-120.0, 1.0, 1.0), hsv_to_rgb(240.0, 1.0, 1.0)));
    }

    #[test]
    fn test_hsv_to_rgb_white() {
        assert!(close(hsv_to_rgb(0.0, 0.0, 1.0), [1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_hsv_to_rgb_black() {
        assert!(close(hsv_to_rgb(0.0, 1.0, 0.0), [0.0, 0.0, 0.0]));
    }
}
