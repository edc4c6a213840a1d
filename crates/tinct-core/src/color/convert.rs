//! Channel-level conversions between hex, RGB, HSL and WCAG luminance.
//!
//! HSL follows the standard hexcone transform: hue in degrees `[0, 360)`,
//! saturation and lightness in percent `[0, 100]`. Converting HSL back to
//! RGB truncates each channel (it does not round), so a lightness nudge of a
//! few percent always moves the integer channels in the requested direction
//! or leaves them where they are.

use super::Rgb;

/// Formats an RGB triplet as canonical lowercase `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.0, rgb.1, rgb.2)
}

/// Parses a hex color code, with or without the leading `#`.
///
/// Accepts 3-digit (`#rgb`) and 6-digit (`#rrggbb`) forms.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, String> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color: {}", hex));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| format!("Invalid hex: {}", hex))
    };

    match digits.len() {
        3 => Ok(Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 => Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(format!(
            "Invalid hex color: {} (must be 3 or 6 digits)",
            hex
        )),
    }
}

/// Converts RGB to `(hue°, saturation%, lightness%)`.
pub fn rgb_to_hsl(rgb: Rgb) -> (f64, f64, f64) {
    let r = rgb.0 as f64 / 255.0;
    let g = rgb.1 as f64 / 255.0;
    let b = rgb.2 as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let sum = max + min;
    let range = max - min;
    let l = sum / 2.0;

    if range == 0.0 {
        return (0.0, 0.0, l * 100.0);
    }

    let s = if l <= 0.5 {
        range / sum
    } else {
        range / (2.0 - sum)
    };

    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;
    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    let h = (h / 6.0).rem_euclid(1.0);

    (h * 360.0, s * 100.0, l * 100.0)
}

/// Converts `(hue°, saturation%, lightness%)` to RGB, truncating each channel.
///
/// Saturation and lightness are clamped to `[0, 100]`; hue wraps.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = (h / 360.0).rem_euclid(1.0);
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        (
            hue_channel(m1, m2, h + 1.0 / 3.0),
            hue_channel(m1, m2, h),
            hue_channel(m1, m2, h - 1.0 / 3.0),
        )
    };

    Rgb(to_channel(r), to_channel(g), to_channel(b))
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).clamp(0.0, 255.0) as u8
}

/// Linearizes an sRGB channel (0–255) per WCAG 2.0.
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in `[0, 1]`.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * srgb_to_linear(rgb.0) + 0.7152 * srgb_to_linear(rgb.1) + 0.0722 * srgb_to_linear(rgb.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // =====================================================================
    // Hex
    // =====================================================================

    #[test]
    fn hex_formats_lowercase() {
        assert_eq!(rgb_to_hex(Rgb(255, 107, 53)), "#ff6b35");
        assert_eq!(rgb_to_hex(Rgb(0, 0, 0)), "#000000");
    }

    #[test]
    fn hex_parses_six_digits() {
        assert_eq!(hex_to_rgb("#ff6b35").unwrap(), Rgb(255, 107, 53));
        assert_eq!(hex_to_rgb("FF6B35").unwrap(), Rgb(255, 107, 53));
    }

    #[test]
    fn hex_parses_three_digits() {
        assert_eq!(hex_to_rgb("#fff").unwrap(), Rgb(255, 255, 255));
        assert_eq!(hex_to_rgb("#a0c").unwrap(), Rgb(170, 0, 204));
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert!(hex_to_rgb("#ff6b3").is_err());
        assert!(hex_to_rgb("#gggggg").is_err());
        assert!(hex_to_rgb("").is_err());
        assert!(hex_to_rgb("#ééé").is_err());
        assert!(hex_to_rgb("#+f+f+f").is_err());
        assert!(hex_to_rgb("+fff").is_err());
    }

    // =====================================================================
    // HSL
    // =====================================================================

    #[test]
    fn hsl_of_primaries() {
        let (h, s, l) = rgb_to_hsl(Rgb(255, 0, 0));
        assert!(approx_eq(h, 0.0, 1e-9) && approx_eq(s, 100.0, 1e-9) && approx_eq(l, 50.0, 1e-9));

        let (h, _, _) = rgb_to_hsl(Rgb(0, 255, 0));
        assert!(approx_eq(h, 120.0, 1e-9));

        let (h, _, _) = rgb_to_hsl(Rgb(0, 0, 255));
        assert!(approx_eq(h, 240.0, 1e-9));
    }

    #[test]
    fn hsl_of_gray_has_no_hue() {
        let (h, s, l) = rgb_to_hsl(Rgb(25, 25, 25));
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!(approx_eq(l, 9.8039, 1e-3));
    }

    #[test]
    fn hue_stays_below_360() {
        // Magenta-leaning red wraps just under 360.
        let (h, _, _) = rgb_to_hsl(Rgb(255, 0, 1));
        assert!(h < 360.0 && h > 359.0, "hue {h}");
    }

    #[test]
    fn hsl_to_rgb_truncates() {
        // hsl(210, 40, 60) lands on 112.2 / 152.99.. / 193.8 before truncation.
        assert_eq!(hsl_to_rgb(210.0, 40.0, 60.0), Rgb(112, 152, 193));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 10.0), Rgb(25, 25, 25));
        assert_eq!(hsl_to_rgb(120.0, 30.0, 20.0), Rgb(35, 66, 35));
    }

    #[test]
    fn hsl_to_rgb_clamps_out_of_range() {
        assert_eq!(hsl_to_rgb(0.0, 50.0, 140.0), Rgb(255, 255, 255));
        assert_eq!(hsl_to_rgb(0.0, 50.0, -5.0), Rgb(0, 0, 0));
    }

    // =====================================================================
    // Luminance
    // =====================================================================

    #[test]
    fn luminance_extremes() {
        assert!(approx_eq(relative_luminance(Rgb(0, 0, 0)), 0.0, 1e-12));
        assert!(approx_eq(relative_luminance(Rgb(255, 255, 255)), 1.0, 1e-9));
    }

    #[test]
    fn luminance_weights_green_highest() {
        let r = relative_luminance(Rgb(255, 0, 0));
        let g = relative_luminance(Rgb(0, 255, 0));
        let b = relative_luminance(Rgb(0, 0, 255));
        assert!(approx_eq(r, 0.2126, 1e-9));
        assert!(approx_eq(g, 0.7152, 1e-9));
        assert!(approx_eq(b, 0.0722, 1e-9));
    }
}
