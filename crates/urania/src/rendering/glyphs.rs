//! Static body and sign glyph tables.

use crate::chart::ZodiacSign;

/// Shown for ids without a known glyph.
pub const UNKNOWN_GLYPH: &str = "?";

/// Body glyphs keyed by folded id (lowercase, separators removed).
const BODY_GLYPHS: &[(&str, &str)] = &[
    ("sun", "☉"),
    ("moon", "☽"),
    ("mercury", "☿"),
    ("venus", "♀"),
    ("mars", "♂"),
    ("jupiter", "♃"),
    ("saturn", "♄"),
    ("uranus", "♅"),
    ("neptune", "♆"),
    ("pluto", "♇"),
    ("chiron", "⚷"),
    ("meannode", "☊"),
    ("truenode", "☊"),
    ("northnode", "☊"),
    ("southnode", "☋"),
    ("lilithmean", "⚸"),
    ("lilithtrue", "⚸"),
    ("parsfortunae", "⊗"),
    ("vertex", "Vx"),
    ("antivertex", "Av"),
];

const SIGN_GLYPHS: [&str; 12] = ["♈", "♉", "♊", "♋", "♌", "♍", "♎", "♏", "♐", "♑", "♒", "♓"];

// "MeanNode", "mean_node" and "meanNode" all fold to "meannode"
fn fold_id(id: &str) -> String {
    id.chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn body_glyph(id: &str) -> &'static str {
    let folded = fold_id(id);
    BODY_GLYPHS
        .iter()
        .find(|(key, _)| *key == folded)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(UNKNOWN_GLYPH)
}

/// "m" or "t" for mean and true calculated points, to tell twin glyphs apart.
pub fn node_indicator(id: &str) -> Option<&'static str> {
    let folded = fold_id(id);
    if folded.contains("mean") {
        Some("m")
    } else if folded.contains("true") {
        Some("t")
    } else {
        None
    }
}

pub fn sign_glyph(sign: ZodiacSign) -> &'static str {
    SIGN_GLYPHS[sign.index() as usize]
}
