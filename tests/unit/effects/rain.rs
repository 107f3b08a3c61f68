use super::*;

use rand::{rngs::SmallRng, SeedableRng};

use crate::grid::plane::Plane;

#[test]
fn droplets_spawn_only_on_the_leading_layer() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut cube = Cube::new();
    let mut rain = Rain::new(100, 5, Plane::Z.backward());

    rain.step(&mut cube, &mut rng);

    for x in 0..SIZE {
        for y in 0..SIZE {
            for z in 0..SIZE - 1 {
                assert!(!cube.get(x, y, z), "droplet below the leading layer");
            }
        }
    }
    assert!(cube.count_lit() < 5);
}

#[test]
fn existing_drops_fall_one_layer_per_tick() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut cube = Cube::new();
    cube.set(3, 3, 7, true);

    let mut rain = Rain::new(100, 1, Plane::Z.backward());
    rain.step(&mut cube, &mut rng);

    // max_droplets of 1 means the draw over [0,1) spawns nothing, so the
    // only lit voxel is the old drop, one layer down.
    assert!(cube.get(3, 3, 6));
    assert_eq!(cube.count_lit(), 1);
}

#[test]
fn forward_rain_leads_from_layer_zero() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut cube = Cube::new();
    let mut rain = Rain::new(100, 5, Plane::X.forward());

    rain.step(&mut cube, &mut rng);

    for x in 1..SIZE {
        for y in 0..SIZE {
            for z in 0..SIZE {
                assert!(!cube.get(x, y, z));
            }
        }
    }
}
