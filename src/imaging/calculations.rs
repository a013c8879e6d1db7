//! Pure calculation functions for crop geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// Largest window of the source with the target's aspect ratio.
///
/// The window spans the full source height when the source is wider than the
/// target, the full source width otherwise. Cutting this window first and then
/// resizing it to the target gives the same framing as scaling to cover and
/// centre-cropping, while never allocating more than the source or target.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `target` - Target area dimensions (width, height)
///
/// # Returns
/// * `(width, height)` - Window size in source pixels, at least 1×1
pub fn calculate_crop_window(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = (source.0 as u64, source.1 as u64);
    let (tgt_w, tgt_h) = (target.0 as u64, target.1 as u64);

    if src_w * tgt_h > tgt_w * src_h {
        // Source is wider: keep full height, trim the sides
        let w = (src_h * tgt_w + tgt_h / 2) / tgt_h;
        (w.clamp(1, src_w) as u32, source.1)
    } else {
        // Source is taller (or same shape): keep full width, trim top and bottom
        let h = (src_w * tgt_h + tgt_w / 2) / tgt_w;
        (source.0, h.clamp(1, src_h) as u32)
    }
}

/// Top-left corner of a `window`-sized rectangle centred inside `outer`.
///
/// ```text
/// outer 1000x500, window 500x500 → (250, 0)
/// ```
pub fn calculate_center_offset(outer: (u32, u32), window: (u32, u32)) -> (u32, u32) {
    (
        outer.0.saturating_sub(window.0) / 2,
        outer.1.saturating_sub(window.1) / 2,
    )
}

/// Split an ImageMagick-style PNG quality value into `(zlib level, row filter)`.
///
/// The tens digit selects the zlib level, the ones digit the PNG filter type.
/// Quality `1` therefore asks for level 0 with the Sub filter. The encoder
/// only offers coarse presets, so the backend rounds the level to the nearest
/// one (see `png_settings`).
pub fn split_png_quality(quality: u32) -> (u32, u32) {
    ((quality / 10).min(9), quality % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // calculate_crop_window tests
    // =========================================================================

    #[test]
    fn window_wider_source_to_portrait_target() {
        // 800x600 → 400x500: full height, width = 600 * 4/5 = 480
        assert_eq!(calculate_crop_window((800, 600), (400, 500)), (480, 600));
    }

    #[test]
    fn window_taller_source_to_landscape_target() {
        // 600x800 → 500x400: full width, height = 600 * 4/5 = 480
        assert_eq!(calculate_crop_window((600, 800), (500, 400)), (600, 480));
    }

    #[test]
    fn window_same_aspect_ratio_is_whole_source() {
        assert_eq!(calculate_crop_window((800, 600), (400, 300)), (800, 600));
    }

    #[test]
    fn window_square_source_to_windows_landscape() {
        // 64x64 onto 2480x1200: full width, height = 64 * 1200/2480 = 31
        assert_eq!(calculate_crop_window((64, 64), (2480, 1200)), (64, 31));
    }

    #[test]
    fn window_for_thin_source_stays_inside_source() {
        // 20x4000 onto 2480x1200: height = 20 * 1200/2480 ≈ 10
        assert_eq!(calculate_crop_window((20, 4000), (2480, 1200)), (20, 10));
        // 4000x20 onto a 480x800 portrait: width = 20 * 480/800 = 12
        assert_eq!(calculate_crop_window((4000, 20), (480, 800)), (12, 20));
    }

    #[test]
    fn window_never_exceeds_source_or_collapses() {
        for source in [(3, 7), (7, 3), (1000, 999), (1, 1), (4098, 17), (1, 5000)] {
            for target in [(1366, 1366), (620, 300), (1152, 1920), (4098, 1)] {
                let (w, h) = calculate_crop_window(source, target);
                assert!(w >= 1 && h >= 1, "{source:?} → {target:?}");
                assert!(w <= source.0 && h <= source.1, "{source:?} → {target:?}");
                assert!(w == source.0 || h == source.1, "{source:?} → {target:?}");
            }
        }
    }

    // =========================================================================
    // calculate_center_offset tests
    // =========================================================================

    #[test]
    fn center_offset_horizontal_overflow() {
        assert_eq!(calculate_center_offset((1000, 500), (500, 500)), (250, 0));
    }

    #[test]
    fn center_offset_vertical_overflow() {
        assert_eq!(calculate_center_offset((480, 853), (480, 800)), (0, 26));
    }

    #[test]
    fn center_offset_exact_fit() {
        assert_eq!(calculate_center_offset((620, 300), (620, 300)), (0, 0));
    }

    // =========================================================================
    // split_png_quality tests
    // =========================================================================

    #[test]
    fn png_quality_one_is_level_zero_sub() {
        assert_eq!(split_png_quality(1), (0, 1));
    }

    #[test]
    fn png_quality_digits() {
        assert_eq!(split_png_quality(75), (7, 5));
        assert_eq!(split_png_quality(100), (9, 0));
    }
}
