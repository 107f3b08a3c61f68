use super::*;

/// The glyph as drawn on a Y slice: voxel (x, y0, z) is row 7-z, column
/// 7-x of the bitmap.
fn slice_matches_glyph(cube: &Cube, y: usize, glyph: &[u8; SIZE]) -> bool {
    for x in 0..SIZE {
        for z in 0..SIZE {
            let expected = glyph[7 - z] & (1 << (7 - x)) != 0;
            if cube.get(x, y, z) != expected {
                return false;
            }
        }
    }
    true
}

#[test]
fn the_glyph_scrolls_one_slice_per_tick() {
    let mut rng = rand::rngs::mock::StepRng::new(0, 1);
    let mut cube = Cube::new();
    let mut fx = Glyphs::new(100, Plane::Y.forward());

    fx.step(&mut cube, &mut rng);
    assert!(slice_matches_glyph(&cube, 1, &GLYPHS[0]));
    assert_eq!(fx.glyph_index(), 0);

    fx.step(&mut cube, &mut rng);
    assert!(slice_matches_glyph(&cube, 2, &GLYPHS[0]));
}

#[test]
fn eight_ticks_scroll_the_glyph_off_and_advance_the_index() {
    let mut rng = rand::rngs::mock::StepRng::new(0, 1);
    let mut cube = Cube::new();
    let mut fx = Glyphs::new(100, Plane::Y.forward());

    for _ in 0..7 {
        fx.step(&mut cube, &mut rng);
    }
    // The first glyph has reached the trailing face and the index moved on.
    assert!(slice_matches_glyph(&cube, 7, &GLYPHS[0]));
    assert_eq!(fx.glyph_index(), 1);

    fx.step(&mut cube, &mut rng);
    // A fresh pass: the old glyph is gone, the next one enters at slice 1.
    assert!(slice_matches_glyph(&cube, 1, &GLYPHS[1]));
    for y in 2..SIZE {
        for x in 0..SIZE {
            for z in 0..SIZE {
                assert!(!cube.get(x, y, z), "stale glyph content at y={y}");
            }
        }
    }
}

#[test]
fn backward_planes_lead_from_the_far_face() {
    let mut rng = rand::rngs::mock::StepRng::new(0, 1);
    let mut cube = Cube::new();
    let mut fx = Glyphs::new(100, Plane::Y.backward());

    fx.step(&mut cube, &mut rng);
    assert!(slice_matches_glyph(&cube, 6, &GLYPHS[0]));
}

#[test]
fn the_glyph_table_cycles() {
    let mut rng = rand::rngs::mock::StepRng::new(0, 1);
    let mut cube = Cube::new();
    let mut fx = Glyphs::new(100, Plane::Y.forward());

    for _ in 0..7 * GLYPHS.len() {
        fx.step(&mut cube, &mut rng);
    }
    assert_eq!(fx.glyph_index(), 0);
}
