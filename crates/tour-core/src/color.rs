#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);
    pub const RED: Color = Color(255, 0, 0, 255);

    /// Packed `0xAARRGGBB`, the way design tools and Android resources
    /// write colors (`0xFFBBDEFB`).
    pub const fn from_argb(argb: u32) -> Self {
        Color(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }
    /// `#RRGGBB` or `#RRGGBBAA`. Anything unparsable reads as opaque black.
    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        let byte = |i: usize| s.get(i..i + 2).and_then(|h| u8::from_str_radix(h, 16).ok());
        let rgb = (byte(0), byte(2), byte(4));
        let (Some(r), Some(g), Some(b)) = rgb else {
            return Color::BLACK;
        };
        match (s.len(), byte(6)) {
            (6, _) => Color(r, g, b, 255),
            (8, Some(a)) => Color(r, g, b, a),
            _ => Color::BLACK,
        }
    }
}
