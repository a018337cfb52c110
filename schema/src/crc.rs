use std::fmt;

use crc16::{State, MCRF4XX};

/// Seed of the MAVLink X.25 digest.
pub const X25_INIT: u16 = 0xFFFF;

/// CRC-16/MCRF4XX accumulator, the checksum MAVLink uses for frames and
/// for CRC_EXTRA.
pub struct X25Crc {
    state: State<MCRF4XX>,
}

impl X25Crc {
    pub fn new() -> Self {
        X25Crc { state: State::<MCRF4XX>::new() }
    }

    pub fn accumulate(&mut self, byte: u8) {
        self.state.update(&[byte]);
    }

    pub fn update(&mut self, bytes: &[u8]) {
        self.state.update(bytes);
    }

    pub fn get(&self) -> u16 {
        self.state.get()
    }

    pub fn calculate(bytes: &[u8]) -> u16 {
        State::<MCRF4XX>::calculate(bytes)
    }
}

impl Default for X25Crc {
    fn default() -> Self {
        X25Crc::new()
    }
}

impl fmt::Debug for X25Crc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("X25Crc").field("crc", &format_args!("{:#06x}", self.get())).finish()
    }
}

/// Folds a 16-bit digest into the 8-bit value carried as CRC_EXTRA.
pub fn fold_to_byte(crc: u16) -> u8 {
    ((crc & 0xFF) ^ (crc >> 8)) as u8
}
