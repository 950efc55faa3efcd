//=========================================================================
// Pixel Format Conversion
//
// Converts between the engine's packed ARGB32 words and the host
// surface's RGBA byte order.
//
// Layouts:
// ```text
//   engine word:   [A:31..24][R:23..16][G:15..8][B:7..0]
//   surface bytes: [R][G][B][A]
// ```
//
// The whole buffer is converted every frame in row-major order. There
// is no dirty-rectangle tracking and no partial-row copy.
//
//=========================================================================

//=== Constants ===========================================================

/// Packed engine pixel (`A << 24 | R << 16 | G << 8 | B`).
pub type Argb32 = u32;

/// Bytes per pixel in the surface buffer.
pub const BYTES_PER_PIXEL: usize = 4;

//=== Single Pixel ========================================================

/// Converts one packed ARGB32 word into RGBA bytes.
#[inline]
pub fn argb_to_rgba(pixel: Argb32) -> [u8; 4] {
    let [a, r, g, b] = pixel.to_be_bytes();
    [r, g, b, a]
}

/// Packs RGBA bytes into an ARGB32 word.
#[inline]
pub fn rgba_to_argb(rgba: [u8; 4]) -> Argb32 {
    let [r, g, b, a] = rgba;
    u32::from_be_bytes([a, r, g, b])
}

//=== Whole Buffers =======================================================

/// Converts `src` into `dst`, four bytes per pixel.
///
/// Converts `min(src.len(), dst.len() / 4)` pixels and returns that
/// count. The bridge sizes both buffers identically, so a short count
/// only happens on misuse.
pub fn convert_frame(src: &[Argb32], dst: &mut [u8]) -> usize {
    debug_assert_eq!(src.len() * BYTES_PER_PIXEL, dst.len());

    let mut converted = 0;
    for (out, &pixel) in dst.chunks_exact_mut(BYTES_PER_PIXEL).zip(src) {
        out.copy_from_slice(&argb_to_rgba(pixel));
        converted += 1;
    }
    converted
}

/// Packs a decoded RGBA image into engine pixels.
///
/// Used when the host decodes an image on the engine's behalf and hands
/// the raw pixels over. Trailing bytes that do not form a whole pixel
/// are ignored.
pub fn pack_rgba_image(rgba: &[u8]) -> Vec<Argb32> {
    rgba.chunks_exact(BYTES_PER_PIXEL)
        .map(|px| rgba_to_argb([px[0], px[1], px[2], px[3]]))
        .collect()
}

//=========================================================================
// Unit Tests
//=========================================================================
