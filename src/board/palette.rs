//! Stroke colors for the intersection overlay.

/// Per-row ring colors, indexed by grid row i. Ordered lookup instead of a
/// branch per index.
pub const ROW_COLORS: [&str; 11] = [
    "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#00FFFF", "#000000", "#004400", "#000044",
    "#444400", "#004444", "#444444",
];

/// Translucent wash applied to the two marker rows of the prototype overlay.
pub fn row_wash(j: usize) -> Option<&'static str> {
    match j {
        4 => Some("blue"),
        6 => Some("red"),
        _ => None,
    }
}
