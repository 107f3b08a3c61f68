use super::*;

use rand::{rngs::SmallRng, SeedableRng};

use crate::display::bus::RecordingBus;
use crate::effects::glow::FullyOn;
use crate::schedule::scheduler::Policy;

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock::new();
    let a = clock.now_ms();
    let b = clock.now_ms();
    assert!(b >= a);
}

#[test]
fn a_tick_runs_mutate_then_render() {
    let mut rng = SmallRng::seed_from_u64(0);
    let effects: Vec<Box<dyn crate::effects::Effect>> = vec![Box::new(FullyOn::new())];
    let scheduler = Scheduler::new(1000, effects, Policy::Fixed);
    let mut engine = Engine::new(scheduler, DisplayDriver::new(RecordingBus::new()));

    engine.start(&mut rng);
    engine.tick(0, &mut rng);

    // The frame rendered after the activation hook filled the cube.
    let bytes = engine.driver_mut().bus().bytes();
    assert!(bytes.iter().filter(|&&b| b == 0xFF).count() >= 64);
}
