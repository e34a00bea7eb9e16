//! Glyph advance widths of the standard Helvetica font
//!
//! Widths come from the Adobe Helvetica AFM and are in 1/1000 em. The PDF
//! writer prints characters outside WinAnsi as `?`, so they measure as `?`.

use super::layout::MM_PER_PT;

/// Advance of `?`, used for characters the font cannot print
const REPLACEMENT_WIDTH: u16 = 556;

/// Printable ASCII, `' '` through `'~'`
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' .. '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0' .. '?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@' .. 'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P' .. '_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`' .. 'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p' .. '~'
];

/// Latin-1 supplement, U+00A0 through U+00FF
const LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // U+00A0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // U+00B0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // U+00C0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // U+00D0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // U+00E0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // U+00F0
];

/// Advance width of `c` in Helvetica, in 1/1000 em
#[must_use]
pub fn helvetica_advance(c: char) -> u16 {
    let code = u32::from(c);
    let lookup = |table: &[u16], base: u32| {
        usize::try_from(code - base)
            .ok()
            .and_then(|i| table.get(i).copied())
            .unwrap_or(REPLACEMENT_WIDTH)
    };
    match code {
        0x20..=0x7E => lookup(&ASCII_WIDTHS, 0x20),
        0xA0..=0xFF => lookup(&LATIN1_WIDTHS, 0xA0),
        _ => REPLACEMENT_WIDTH,
    }
}

/// Advance width of `text` in em
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn helvetica_width_em(text: &str) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(helvetica_advance(c))).sum();
    units as f32 / 1000.0
}

/// Rendered width of `text` at `font_size`, in millimetres
#[must_use]
pub fn text_width(text: &str, font_size: f32) -> f32 {
    helvetica_width_em(text) * font_size * MM_PER_PT
}
