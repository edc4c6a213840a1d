//! Terminal color helpers.

use tinct_core::Rgb;

/// Nearest xterm 256-color index for an RGB color.
///
/// Grays go to the 24-step ramp; everything else to the 6x6x6 cube.
pub fn rgb_to_ansi256(Rgb(r, g, b): Rgb) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
