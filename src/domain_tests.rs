//! Domain-critical regression tests.
//!
//! These tests exercise the pipeline end to end and are designed to catch
//! specific classes of bugs, not just confirm happy paths. Each test
//! documents the regression it guards against.

use crate::color::{ColorSpace, Rgb565, Rgb888};
use crate::output::unpack_indices;
use crate::palette::{Palette, Preset, PALETTE_SIZE, TRANSPARENT_INDEX};
use crate::quantize::PixelBuffer;
use crate::Quantizer;

/// A 16-step greyscale ramp palette, slot 0 black through slot 15 white.
fn grey_ramp() -> Palette {
    let mut colors = [Rgb888::new(0, 0, 0); PALETTE_SIZE];
    for (i, slot) in colors.iter_mut().enumerate() {
        let v = (i * 17) as u8;
        *slot = Rgb888::new(v, v, v);
    }
    Palette::from_colors(colors)
}

// ============================================================================
// RGB565 derivation
// ============================================================================

/// If this breaks, the RGB565 derivation is rounding instead of
/// truncating, which would shift palette colors on real display hardware.
#[test]
fn test_rgb565_truncation_for_every_preset_entry() {
    for preset in Preset::ALL {
        let palette = Palette::preset(preset);
        for i in 0..PALETTE_SIZE {
            let c = palette.color(i);
            let expected = ((c.r as u16 & 0xF8) << 8) | ((c.g as u16 & 0xFC) << 3) | (c.b as u16 >> 3);
            assert_eq!(
                palette.rgb565(i),
                Rgb565(expected),
                "{} slot {} packs wrong",
                preset,
                i
            );
        }
    }
}

/// 5/6/5-exact colors must survive expand-and-repack unchanged.
#[test]
fn test_rgb565_idempotent_for_exact_colors() {
    for preset in Preset::ALL {
        for c in Palette::preset(preset).rgb565_table() {
            assert_eq!(Rgb565::from(c.to_rgb888()), c);
        }
    }
}

// ============================================================================
// Transparency
// ============================================================================

/// If this breaks, translucent pixels are leaking into color matching:
/// any alpha below 128 must force index 0 regardless of the pixel's RGB,
/// in every color space and both engine modes.
#[test]
fn test_transparent_rule_overrides_color() {
    let loud_colors = [
        Rgb888::new(255, 255, 255),
        Rgb888::new(248, 0, 0),
        Rgb888::new(0, 248, 248),
        Rgb888::new(132, 100, 0),
    ];
    for space in [ColorSpace::Perceptual, ColorSpace::LinearRgb, ColorSpace::Hsv] {
        for dither in [false, true] {
            let quantizer = Quantizer::new(Palette::preset(Preset::Classic))
                .color_space(space)
                .dither(dither);
            let pixels: Vec<Rgb888> = loud_colors.to_vec();
            let alpha = vec![0, 64, 127, 127];
            let buffer = PixelBuffer::new(4, 1, pixels, Some(alpha)).unwrap();
            let image = quantizer.quantize(&buffer);
            assert!(
                image.indices().iter().all(|&i| i == TRANSPARENT_INDEX),
                "alpha < 128 must force index 0 ({:?}, dither={})",
                space,
                dither
            );
        }
    }
}

/// 1x1 fully transparent pixel: index 0 and packed byte 0x00 in any
/// palette and mode.
#[test]
fn test_single_transparent_pixel_scenario() {
    for preset in Preset::ALL {
        for dither in [false, true] {
            let quantizer = Quantizer::new(Palette::preset(preset)).dither(dither);
            let buffer =
                PixelBuffer::new(1, 1, vec![Rgb888::new(200, 50, 90)], Some(vec![0])).unwrap();
            let image = quantizer.quantize(&buffer);
            assert_eq!(image.indices(), &[0]);
            assert_eq!(image.pack(), vec![0x00]);
        }
    }
}

// ============================================================================
// Nearest-color resolution through the engine
// ============================================================================

/// If this breaks, slot 0 is being excluded from nearest-color search for
/// opaque pixels. The transparent slot is a convention about *output for
/// translucent pixels*, not a restriction on matching: opaque pure black
/// correctly lands on slot 0 of the classic palette.
#[test]
fn test_opaque_black_maps_to_slot_zero() {
    let quantizer = Quantizer::new(Palette::preset(Preset::Classic));
    let pixels = vec![Rgb888::new(255, 255, 255), Rgb888::new(0, 0, 0)];
    let buffer = PixelBuffer::new(2, 1, pixels, None).unwrap();
    let image = quantizer.quantize(&buffer);

    assert_eq!(image.indices(), &[1, 0], "white -> slot 1, black -> slot 0");
    // Low nibble holds the even column: (0 << 4) | 1
    assert_eq!(image.pack(), vec![0x01]);
}

/// Quantizing twice with the same inputs must be bit-identical — the
/// pipeline has no hidden state across runs.
#[test]
fn test_run_determinism_with_dithering() {
    let quantizer = Quantizer::new(Palette::preset(Preset::Neon)).dither(true);
    let pixels: Vec<Rgb888> = (0..64)
        .map(|i| Rgb888::new((i * 4) as u8, 255 - (i * 4) as u8, (i * 2) as u8))
        .collect();
    let buffer = PixelBuffer::new(8, 8, pixels, None).unwrap();
    assert_eq!(
        quantizer.quantize(&buffer).indices(),
        quantizer.quantize(&buffer).indices()
    );
}

// ============================================================================
// Error diffusion
// ============================================================================

/// If this breaks, the Floyd-Steinberg weights no longer sum to one (or
/// error is being dropped mid-image): the mean brightness of dithered
/// output must track the input closely on a uniform opaque image. A small
/// drift is expected from error falling off the right and bottom edges.
#[test]
fn test_dither_conserves_mean_brightness() {
    let side = 24u32;
    for grey in [40u8, 100, 150, 220] {
        let quantizer = Quantizer::new(grey_ramp())
            .color_space(ColorSpace::LinearRgb)
            .dither(true);
        let pixels = vec![Rgb888::new(grey, grey, grey); (side * side) as usize];
        let buffer = PixelBuffer::new(side, side, pixels, None).unwrap();
        let image = quantizer.quantize(&buffer);

        let mean: f64 = image
            .indices()
            .iter()
            .map(|&i| (i as usize * 17) as f64)
            .sum::<f64>()
            / (side * side) as f64;
        assert!(
            (mean - grey as f64).abs() < 6.0,
            "grey {} dithered to mean {:.2}; diffusion is losing error",
            grey,
            mean
        );
    }
}

/// Without dithering a uniform mid-tone collapses to one palette entry;
/// with dithering it must mix neighboring entries. Guards against the
/// dither flag silently doing nothing.
#[test]
fn test_dithering_actually_mixes_entries() {
    let pixels = vec![Rgb888::new(110, 110, 110); 256];
    let buffer = PixelBuffer::new(16, 16, pixels, None).unwrap();

    let flat = Quantizer::new(grey_ramp())
        .color_space(ColorSpace::LinearRgb)
        .quantize(&buffer);
    let unique_flat: std::collections::HashSet<u8> = flat.indices().iter().copied().collect();
    assert_eq!(unique_flat.len(), 1, "flat mode must pick one entry");

    let dithered = Quantizer::new(grey_ramp())
        .color_space(ColorSpace::LinearRgb)
        .dither(true)
        .quantize(&buffer);
    let unique_dithered: std::collections::HashSet<u8> =
        dithered.indices().iter().copied().collect();
    assert!(
        unique_dithered.len() > 1,
        "dithering 110 against a 17-step ramp must mix entries"
    );
}

/// Transparent holes must not distort the colors dithered around them:
/// error diffusion skips translucent targets, so opaque output stays
/// within the entries adjacent to the input tone.
#[test]
fn test_dither_error_does_not_cross_transparent_holes() {
    let side = 16u32;
    let count = (side * side) as usize;
    let pixels = vec![Rgb888::new(100, 100, 100); count];
    // Checkerboard of transparent holes
    let alpha: Vec<u8> = (0..count)
        .map(|i| {
            let (x, y) = (i % side as usize, i / side as usize);
            if (x + y) % 2 == 0 {
                255
            } else {
                0
            }
        })
        .collect();
    let buffer = PixelBuffer::new(side, side, pixels, Some(alpha.clone())).unwrap();
    let image = Quantizer::new(grey_ramp())
        .color_space(ColorSpace::LinearRgb)
        .dither(true)
        .quantize(&buffer);

    for (i, &idx) in image.indices().iter().enumerate() {
        if alpha[i] == 0 {
            assert_eq!(idx, TRANSPARENT_INDEX);
        } else {
            // 100/17 ≈ 5.9: with no error able to accumulate through the
            // holes, opaque pixels stay on the adjacent ramp entries.
            assert!(
                (5..=7).contains(&idx),
                "pixel {} drifted to ramp entry {}",
                i,
                idx
            );
        }
    }
}

// ============================================================================
// Packing
// ============================================================================

/// Full-pipeline pack/unpack round trip, covering odd widths where the
/// last byte of each row zero-fills its high nibble.
#[test]
fn test_pack_roundtrip_through_pipeline() {
    for (w, h) in [(5u32, 3u32), (4, 4), (1, 7), (9, 2)] {
        let quantizer = Quantizer::new(Palette::preset(Preset::Sepia)).dither(true);
        let pixels: Vec<Rgb888> = (0..w * h)
            .map(|i| {
                let v = ((i * 255) / (w * h)) as u8;
                Rgb888::new(v, v / 2, v / 3)
            })
            .collect();
        let buffer = PixelBuffer::new(w, h, pixels, None).unwrap();
        let image = quantizer.quantize(&buffer);

        let packed = image.pack();
        assert_eq!(packed.len(), h as usize * (w as usize).div_ceil(2));
        assert_eq!(
            unpack_indices(&packed, w, h),
            image.indices(),
            "{}x{} round trip",
            w,
            h
        );
    }
}

/// The firmware bundle must echo exactly what the packing format needs
/// to be decoded: dimensions, packed bytes, and the RGB565 table.
#[test]
fn test_firmware_bundle_is_self_describing() {
    let quantizer = Quantizer::new(Palette::preset(Preset::Classic));
    let pixels = vec![Rgb888::new(248, 0, 0); 15];
    let buffer = PixelBuffer::new(5, 3, pixels, None).unwrap();
    let firmware = quantizer.quantize(&buffer).to_firmware();

    assert_eq!((firmware.width, firmware.height), (5, 3));
    assert_eq!(firmware.data.len(), 9); // 3 rows x ceil(5/2)
    assert_eq!(firmware.palette[2], Rgb565(0xF800));
    // All-red image: every low and high nibble is 2 except row-end fills
    assert_eq!(firmware.data[0], 0x22);
    assert_eq!(firmware.data[2], 0x02);
}
