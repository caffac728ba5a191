use std::vec::Vec;

use crate::driver::config::CrtcRegisters;
use crate::driver::cursor::PortIo;
use crate::sync::Spinlock;

pub type PlatformPorts = RecordingPorts;

/// Held by tests that touch the global kernel console.
pub static CONSOLE_MUTEX: Spinlock<()> = Spinlock::new(());

/// Port I/O sink remembering every `(port, value)` written, in order.
#[derive(Debug, Default)]
pub struct RecordingPorts {
    writes: Vec<(u16, u8)>,
}

impl RecordingPorts {
    pub fn writes(&self) -> &[(u16, u8)] {
        &self.writes
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl PortIo for RecordingPorts {
    fn write_byte(&mut self, port: u16, value: u8) {
        self.writes.push((port, value));
    }
}

pub unsafe fn crtc_ports(_regs: CrtcRegisters) -> PlatformPorts {
    RecordingPorts::default()
}
