use super::*;

use crate::foundation::buffer::{ImageRgbF32, MaskU8};

fn image_from_columns(columns: &[[f32; 3]]) -> ImageRgbF32 {
    let mut data = Vec::with_capacity(columns.len() * 3);
    for c in columns {
        data.extend_from_slice(c);
    }
    ImageRgbF32::from_vec(columns.len() as u32, 1, data).unwrap()
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let base = image_from_columns(&[[0.0; 3]; 4]);
    let overlay = image_from_columns(&[[0.0; 3]; 3]);
    let mut base_mask = MaskU8::new(4, 1).unwrap();
    let mut overlay_mask = MaskU8::new(4, 1).unwrap();

    let err = find_seam(&base, &overlay, &mut base_mask, &mut overlay_mask).unwrap_err();
    assert!(matches!(err, SeamweldError::InvalidInput(_)));
}

#[test]
fn disjoint_masks_report_a_degenerate_graph() {
    let base = image_from_columns(&[[0.0; 3]; 4]);
    let overlay = image_from_columns(&[[0.0; 3]; 4]);
    let mut base_mask = MaskU8::from_vec(4, 1, vec![255, 255, 0, 0]).unwrap();
    let mut overlay_mask = MaskU8::from_vec(4, 1, vec![0, 0, 255, 255]).unwrap();

    let err = find_seam(&base, &overlay, &mut base_mask, &mut overlay_mask).unwrap_err();
    assert!(matches!(err, SeamweldError::DegenerateGraph(_)));
    // Masks are untouched on the degenerate path.
    assert_eq!(base_mask.data, vec![255, 255, 0, 0]);
    assert_eq!(overlay_mask.data, vec![0, 0, 255, 255]);
}

#[test]
fn cut_splits_the_overlap_between_exclusive_regions() {
    // Base covers columns 0..4, overlay covers 2..6; the overlap is
    // columns 2 and 3. The sources agree at column 2 and disagree hard at
    // column 3, so the cheapest cut keeps 2 with the base and gives 3 to
    // the overlay.
    let red = [255.0, 0.0, 0.0];
    let green = [0.0, 255.0, 0.0];
    let base = image_from_columns(&[red, red, red, red, red, red]);
    let overlay = image_from_columns(&[red, red, red, green, green, green]);
    let mut base_mask = MaskU8::from_vec(6, 1, vec![255, 255, 255, 255, 0, 0]).unwrap();
    let mut overlay_mask = MaskU8::from_vec(6, 1, vec![0, 0, 255, 255, 255, 255]).unwrap();

    find_seam(&base, &overlay, &mut base_mask, &mut overlay_mask).unwrap();

    assert_eq!(base_mask.data, vec![255, 255, 255, 0, 0, 0]);
    assert_eq!(overlay_mask.data, vec![0, 0, 0, 255, 255, 255]);
}

#[test]
fn every_overlap_pixel_lands_in_exactly_one_mask() {
    let red = [200.0, 10.0, 10.0];
    let blue = [10.0, 10.0, 200.0];
    let base = image_from_columns(&[red; 8]);
    let overlay = image_from_columns(&[blue; 8]);
    let mut base_mask = MaskU8::from_vec(8, 1, vec![255, 255, 255, 255, 255, 255, 0, 0]).unwrap();
    let mut overlay_mask = MaskU8::from_vec(8, 1, vec![0, 0, 255, 255, 255, 255, 255, 255]).unwrap();

    find_seam(&base, &overlay, &mut base_mask, &mut overlay_mask).unwrap();

    for i in 2..6 {
        let b = base_mask.data[i] > 0;
        let o = overlay_mask.data[i] > 0;
        assert!(b ^ o, "overlap pixel {i} must belong to one source");
    }
    // Exclusive regions keep their original assignment.
    assert_eq!(&base_mask.data[0..2], &[255, 255]);
    assert_eq!(&overlay_mask.data[6..8], &[255, 255]);
}

#[test]
fn identical_inputs_yield_identical_masks() {
    let run = || {
        let gray = [128.0, 128.0, 128.0];
        let base = image_from_columns(&[gray; 8]);
        let overlay = image_from_columns(&[gray; 8]);
        let mut base_mask =
            MaskU8::from_vec(8, 1, vec![255, 255, 255, 255, 255, 255, 0, 0]).unwrap();
        let mut overlay_mask =
            MaskU8::from_vec(8, 1, vec![0, 0, 255, 255, 255, 255, 255, 255]).unwrap();
        find_seam(&base, &overlay, &mut base_mask, &mut overlay_mask).unwrap();
        (base_mask.data, overlay_mask.data)
    };

    assert_eq!(run(), run());
}
