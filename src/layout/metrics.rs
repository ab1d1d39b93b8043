//! Static glyph-width tables used to measure text before wrapping.
//!
//! Widths are in 1/1000 em for the base-14 Helvetica faces, which is what the
//! PDF backend references, so measured widths match the printed output closely
//! enough for line breaking. Tables cover ASCII 0x20..=0x7E; index =
//! `(char as usize) - 32`. Anything else falls back to an average width.

use super::types::TextStyle;

/// Millimetres per typographic point
pub const MM_PER_POINT: f64 = 25.4 / 72.0;

/// Character-width table for one face
pub struct FaceMetrics {
    widths: [u16; 95],
    average_width: u16,
}

impl FaceMetrics {
    /// Width of a string in 1/1000 em
    pub fn measure_units(&self, s: &str) -> u64 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    u64::from(self.widths[code - 32])
                } else {
                    u64::from(self.average_width)
                }
            })
            .sum()
    }
}

/// Regular and bold faces together
#[derive(Clone, Copy)]
pub struct FontMetrics {
    regular: &'static FaceMetrics,
    bold: &'static FaceMetrics,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::helvetica()
    }
}

impl std::fmt::Debug for FontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FontMetrics(Helvetica)")
    }
}

impl FontMetrics {
    pub fn helvetica() -> Self {
        Self {
            regular: &HELVETICA,
            bold: &HELVETICA_BOLD,
        }
    }

    pub fn face(&self, style: TextStyle) -> &'static FaceMetrics {
        match style {
            TextStyle::Normal => self.regular,
            TextStyle::Bold => self.bold,
        }
    }

    /// Rendered width in millimetres at `font_size` points
    pub fn measure(&self, s: &str, style: TextStyle, font_size: f64) -> f64 {
        self.face(style).measure_units(s) as f64 / 1000.0 * font_size * MM_PER_POINT
    }
}

static HELVETICA: FaceMetrics = FaceMetrics {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0-9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A-M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N-Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a-m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n-z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    average_width: 556,
};

static HELVETICA_BOLD: FaceMetrics = FaceMetrics {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0-9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A-M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N-Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a-m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n-z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    average_width: 611,
};
