//! Mathematical helpers for color matching.

/// Euclidean distance between two RGB triples.
pub(crate) fn rgb_distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Converts an 8-bit RGB pixel to floating point channels.
pub(crate) fn rgb_to_f64(px: [u8; 3]) -> [f64; 3] {
    px.map(f64::from)
}
