use super::*;

use crate::foundation::buffer::ImageRgba8;

fn rgba_with_alpha(width: u32, height: u32, alpha: &[u8]) -> ImageRgba8 {
    let mut img = ImageRgba8::new(width, height).unwrap();
    for (i, &a) in alpha.iter().enumerate() {
        img.data[i * 4 + 3] = a;
    }
    img
}

#[test]
fn base_validity_follows_alpha() {
    let base = rgba_with_alpha(3, 1, &[0, 1, 255]);
    let overlay = rgba_with_alpha(3, 1, &[0, 0, 0]);
    let overlay_mask = MaskU8::from_vec(3, 1, vec![255, 255, 255]).unwrap();

    let (base_validity, overlay_validity) = derive_validity(&base, &overlay, &overlay_mask);
    assert_eq!(base_validity.data, vec![0, 255, 255]);
    assert!(overlay_validity.is_all_zero());
}

#[test]
fn overlay_validity_requires_alpha_and_mask() {
    let base = rgba_with_alpha(4, 1, &[0, 0, 0, 0]);
    let overlay = rgba_with_alpha(4, 1, &[255, 255, 0, 0]);
    let overlay_mask = MaskU8::from_vec(4, 1, vec![255, 0, 255, 0]).unwrap();

    let (_, overlay_validity) = derive_validity(&base, &overlay, &overlay_mask);
    assert_eq!(overlay_validity.data, vec![255, 0, 0, 0]);
}

#[test]
fn center_lock_opens_the_inner_rectangle_only() {
    // tile_size 8, offset 0: the 24x24 canvas is exactly the center region.
    let geometry = TileGeometry::new(8, 0).unwrap();
    let mask = MaskU8::from_vec(24, 24, vec![255; 24 * 24]).unwrap();

    let locked = apply_center_lock(&mask, geometry, 2);
    let at = |x: u32, y: u32| locked.data[(y * 24 + x) as usize];

    // Outer 2px ring stays pinned.
    assert_eq!(at(0, 0), 255);
    assert_eq!(at(1, 1), 255);
    assert_eq!(at(23, 23), 255);
    // Inner rectangle is contested.
    assert_eq!(at(2, 2), 0);
    assert_eq!(at(12, 12), 0);
    assert_eq!(at(21, 21), 0);
    assert_eq!(at(22, 22), 255);
}

#[test]
fn center_lock_band_clamps_to_at_least_one() {
    let geometry = TileGeometry::new(8, 0).unwrap();
    let mask = MaskU8::from_vec(24, 24, vec![255; 24 * 24]).unwrap();

    let locked = apply_center_lock(&mask, geometry, 0);
    assert_eq!(locked.data[0], 255);
    assert_eq!(locked.data[24 + 1], 0);
}

#[test]
fn center_lock_band_clamps_to_the_geometry_maximum() {
    // Max band for tile_size 8 is (24/2)-1 = 11, leaving a 2x2 inner hole.
    let geometry = TileGeometry::new(8, 0).unwrap();
    let mask = MaskU8::from_vec(24, 24, vec![255; 24 * 24]).unwrap();

    let locked = apply_center_lock(&mask, geometry, 10_000);
    let zeroed = locked.data.iter().filter(|&&v| v == 0).count();
    assert_eq!(zeroed, 4);
    assert_eq!(locked.data[(11 * 24 + 11) as usize], 0);
    assert_eq!(locked.data[(12 * 24 + 12) as usize], 0);
    assert_eq!(locked.data[(10 * 24 + 11) as usize], 255);
}

#[test]
fn center_lock_does_not_mutate_its_input() {
    let geometry = TileGeometry::new(8, 0).unwrap();
    let mask = MaskU8::from_vec(24, 24, vec![255; 24 * 24]).unwrap();
    let _ = apply_center_lock(&mask, geometry, 4);
    assert!(mask.data.iter().all(|&v| v == 255));
}
