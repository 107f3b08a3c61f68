//! The serial bus: one-byte transmit plus select/deselect bracketing.
//!
//! Two interchangeable physical strategies are provided: [`PulseBus`] pulses
//! a clock+data line pair bit by bit, [`SerialBus`] hands whole bytes to a
//! hardware-assisted transfer. Both must be observationally identical to the
//! receiving shift register for the same configured bit order. Pin-mode and
//! bus-speed setup live behind the collaborator traits and are not modeled
//! here.

/// Which bit of a byte goes out first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BitOrder {
    /// Least significant bit first (the usual shift-register wiring).
    #[default]
    LsbFirst,
    /// Most significant bit first.
    MsbFirst,
}

/// The display driver's view of the bus.
pub trait Bus {
    /// Assert the select (latch) signal, marking the start of a layer.
    fn select(&mut self);
    /// Deassert the select signal, committing the layer.
    fn deselect(&mut self);
    /// Shift one byte out in the bus's configured bit order.
    fn transmit(&mut self, byte: u8);
}

/// Raw line control for the bit-pulsing strategy: clock, data and latch,
/// each driven high or low.
pub trait Lines {
    /// Drive the clock line.
    fn clock(&mut self, high: bool);
    /// Drive the data line.
    fn data(&mut self, high: bool);
    /// Drive the latch line.
    fn latch(&mut self, high: bool);
}

/// Manual bit-pulsing bus: for every bit, set the data line and pulse the
/// clock high then low.
pub struct PulseBus<L: Lines> {
    lines: L,
    order: BitOrder,
}

impl<L: Lines> PulseBus<L> {
    /// A pulsing bus over the given lines.
    pub fn new(lines: L, order: BitOrder) -> Self {
        Self { lines, order }
    }

    /// Consume the bus and hand the lines back.
    pub fn into_lines(self) -> L {
        self.lines
    }
}

impl<L: Lines> Bus for PulseBus<L> {
    fn select(&mut self) {
        self.lines.latch(false);
    }

    fn deselect(&mut self) {
        self.lines.latch(true);
    }

    fn transmit(&mut self, byte: u8) {
        for n in 0..8 {
            let bit = match self.order {
                BitOrder::LsbFirst => byte >> n,
                BitOrder::MsbFirst => byte >> (7 - n),
            } & 1;
            self.lines.data(bit != 0);
            self.lines.clock(true);
            self.lines.clock(false);
        }
    }
}

/// Hardware-assisted byte transfer. The hardware is assumed to shift bytes
/// most significant bit first, as SPI peripherals do.
pub trait Transfer {
    /// Drive the latch line.
    fn latch(&mut self, high: bool);
    /// Shift one byte out, most significant bit first.
    fn transfer(&mut self, byte: u8);
}

/// Bulk-transfer bus: reorders each byte for the configured bit order and
/// delegates the actual shifting to the hardware.
pub struct SerialBus<T: Transfer> {
    port: T,
    order: BitOrder,
}

impl<T: Transfer> SerialBus<T> {
    /// A bulk-transfer bus over the given port.
    pub fn new(port: T, order: BitOrder) -> Self {
        Self { port, order }
    }

    /// Consume the bus and hand the port back.
    pub fn into_port(self) -> T {
        self.port
    }
}

impl<T: Transfer> Bus for SerialBus<T> {
    fn select(&mut self) {
        self.port.latch(false);
    }

    fn deselect(&mut self) {
        self.port.latch(true);
    }

    fn transmit(&mut self, byte: u8) {
        let wire = match self.order {
            BitOrder::MsbFirst => byte,
            BitOrder::LsbFirst => byte.reverse_bits(),
        };
        self.port.transfer(wire);
    }
}

/// What a [`RecordingBus`] observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusEvent {
    /// The select signal was asserted.
    Select,
    /// The select signal was deasserted.
    Deselect,
    /// A byte was transmitted (value as passed to [`Bus::transmit`]).
    Byte(u8),
}

/// In-memory bus double capturing the event stream, for tests and the
/// simulator.
#[derive(Debug, Default)]
pub struct RecordingBus {
    events: Vec<BusEvent>,
}

impl RecordingBus {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything observed so far, in order.
    pub fn events(&self) -> &[BusEvent] {
        &self.events
    }

    /// Only the transmitted bytes, in order.
    pub fn bytes(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                BusEvent::Byte(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    /// Drop everything observed so far.
    pub fn reset(&mut self) {
        self.events.clear();
    }
}

impl Bus for RecordingBus {
    fn select(&mut self) {
        self.events.push(BusEvent::Select);
    }

    fn deselect(&mut self) {
        self.events.push(BusEvent::Deselect);
    }

    fn transmit(&mut self, byte: u8) {
        self.events.push(BusEvent::Byte(byte));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/bus.rs"]
mod tests;
