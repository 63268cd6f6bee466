//! Hue, HSV and RGB arithmetic shared by the renderer and the picker.
//!
//! Angles are degrees in [0, 360). Channels are 0.0 to 1.0.

/// Wrap any angle in degrees into [0, 360).
pub(crate) fn normalize_hue(degrees: f64) -> f64 {
    let h = degrees % 360.0;
    if h < 0.0 {
        // `-1e-14 + 360.0` rounds to 360.0
        let wrapped = h + 360.0;
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    } else {
        h
    }
}

/// HSV → RGB.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = normalize_hue(h) / 60.0;
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSV. Achromatic colors report hue 0.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) * 60.0
    } else if max == g {
        ((b - r) / delta + 2.0) * 60.0
    } else {
        ((r - g) / delta + 4.0) * 60.0
    };

    (normalize_hue(h), s, v)
}

/// RGB for an HSL colour, via chroma. The ring and triangle paint `l = 0.5`.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = normalize_hue(h) / 60.0;
    let second = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };
    let lift = l - chroma / 2.0;
    (r + lift, g + lift, b + lift)
}

/// Quantize a 0.0–1.0 channel to a byte.
pub(crate) fn channel_to_u8(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9 && (a.2 - b.2).abs() < 1e-9
    }

    #[test]
    fn normalize_hue_wraps_into_range() {
        for raw in [-720.5, -360.0, -90.0, -1e-15, 0.0, 45.0, 359.999, 360.0, 725.0] {
            let h = normalize_hue(raw);
            assert!((0.0..360.0).contains(&h), "{raw} -> {h}");
        }
        assert!((normalize_hue(-90.0) - 270.0).abs() < 1e-9);
        assert!((normalize_hue(725.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn primaries_convert_both_ways() {
        assert!(close(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
        assert!(close(hsv_to_rgb(120.0, 1.0, 1.0), (0.0, 1.0, 0.0)));
        assert!(close(hsv_to_rgb(240.0, 1.0, 1.0), (0.0, 0.0, 1.0)));
        assert!(close(rgb_to_hsv(0.0, 0.0, 1.0), (240.0, 1.0, 1.0)));
        assert!(close(rgb_to_hsv(1.0, 1.0, 0.0), (60.0, 1.0, 1.0)));
    }

    #[test]
    fn hsl_half_lightness_is_pure_hue() {
        assert!(close(hsl_to_rgb(120.0, 1.0, 0.5), (0.0, 1.0, 0.0)));
        assert!(close(hsl_to_rgb(90.0, 1.0, 0.5), (0.5, 1.0, 0.0)));
        assert!(close(hsl_to_rgb(-60.0, 1.0, 0.5), (1.0, 0.0, 1.0)));
        for step in 0..72 {
            let h = step as f64 * 5.0;
            assert!(close(hsl_to_rgb(h, 1.0, 0.5), hsv_to_rgb(h, 1.0, 1.0)), "{h}");
        }
    }

    #[test]
    fn hsl_extremes_are_black_and_white() {
        assert!(close(hsl_to_rgb(200.0, 1.0, 0.0), (0.0, 0.0, 0.0)));
        assert!(close(hsl_to_rgb(200.0, 1.0, 1.0), (1.0, 1.0, 1.0)));
        assert!(close(hsl_to_rgb(200.0, 0.0, 0.3), (0.3, 0.3, 0.3)));
    }

    #[test]
    fn grays_have_zero_hue_and_saturation() {
        let (h, s, v) = rgb_to_hsv(0.4, 0.4, 0.4);
        assert_eq!((h, s), (0.0, 0.0));
        assert!((v - 0.4).abs() < 1e-12);
    }
}
