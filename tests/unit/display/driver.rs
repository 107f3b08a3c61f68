use super::*;

use crate::display::bus::{BusEvent, RecordingBus};

#[test]
fn a_frame_is_eight_bracketed_layers() {
    let cube = Cube::new();
    let mut driver = DisplayDriver::new(RecordingBus::new());
    driver.render(&cube);

    let events = driver.bus().events();
    // Per layer: select, layer byte, 8 row bytes, deselect.
    assert_eq!(events.len(), SIZE * 11);
    for z in 0..SIZE {
        let layer = &events[z * 11..(z + 1) * 11];
        assert_eq!(layer[0], BusEvent::Select);
        assert_eq!(layer[1], BusEvent::Byte(1 << z));
        for row in &layer[2..10] {
            assert_eq!(*row, BusEvent::Byte(0x00));
        }
        assert_eq!(layer[10], BusEvent::Deselect);
    }
}

#[test]
fn row_bytes_pack_y_into_bits() {
    let mut cube = Cube::new();
    cube.set(2, 0, 3, true);
    cube.set(2, 5, 3, true);
    cube.set(7, 7, 3, true);

    let mut driver = DisplayDriver::new(RecordingBus::new());
    driver.render(&cube);

    let bytes = driver.bus().bytes();
    // Layer z has 9 bytes: the layer-select byte then rows x=0..7.
    let row = |z: usize, x: usize| bytes[z * 9 + 1 + x];
    assert_eq!(row(3, 2), 0b0010_0001);
    assert_eq!(row(3, 7), 0b1000_0000);
    assert_eq!(row(3, 0), 0x00);
    assert_eq!(row(4, 2), 0x00, "other layers stay dark");
}

#[test]
fn the_wiring_remap_is_applied_before_packing() {
    fn flip_z(cube: &Cube, x: usize, y: usize, z: usize) -> bool {
        cube.get(x, y, 7 - z)
    }

    let mut cube = Cube::new();
    cube.set(0, 0, 7, true);

    let mut driver = DisplayDriver::with_mapping(RecordingBus::new(), flip_z);
    driver.render(&cube);

    let bytes = driver.bus().bytes();
    // The voxel at z=7 shows up in the encoded layer 0.
    assert_eq!(bytes[1], 0b0000_0001);
    assert_eq!(bytes[7 * 9 + 1], 0x00);
}

#[test]
fn set_mapping_replaces_the_wiring() {
    let mut cube = Cube::new();
    cube.set(0, 1, 0, true);

    let mut driver = DisplayDriver::new(RecordingBus::new());
    driver.render(&cube);
    assert_eq!(driver.bus().bytes()[1], 0b0000_0010);

    fn dark(_: &Cube, _: usize, _: usize, _: usize) -> bool {
        false
    }
    driver.bus_mut().reset();
    driver.set_mapping(dark);
    driver.render(&cube);
    for layer in driver.bus().bytes().chunks(9) {
        // Layer-select bytes are untouched by the mapping; rows go dark.
        assert_eq!(layer[0].count_ones(), 1);
        assert!(layer[1..].iter().all(|&b| b == 0));
    }
}
