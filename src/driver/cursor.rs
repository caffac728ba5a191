/******************************************************************************
 * Copyright © 2021-2023 Kévin Lesénéchal <kevin.lesenechal@gmail.com>        *
 * This file is part of the Nucloid operating system.                         *
 *                                                                            *
 * Nucloid is free software; you can redistribute it and/or modify it under   *
 * the terms of the GNU General Public License as published by the Free       *
 * Software Foundation; either version 2 of the License, or (at your option)  *
 * any later version. See LICENSE file for more information.                  *
 ******************************************************************************/

use crate::driver::config::CrtcRegisters;

const REG_CURSOR_START: u8  = 0x0a;
const REG_CURSOR_HIGH: u8   = 0x0e;
const REG_CURSOR_LOW: u8    = 0x0f;

/// Bit 5 of the cursor start register turns the cursor off.
pub const CURSOR_DISABLE: u8 = 0x20;

pub trait PortIo {
    fn write_byte(&mut self, port: u16, value: u8);
}

/// The blinking cursor drawn by the CRT controller.
pub struct HardwareCursor<P> {
    ports: P,
    regs: CrtcRegisters,
    start_scanline: u8,
    visible: bool,
}

impl<P: PortIo> HardwareCursor<P> {
    /// The cursor starts hidden from the driver's point of view; nothing is
    /// written to the CRTC until `enable()` or `disable()` is called.
    pub fn new(ports: P, regs: CrtcRegisters, start_scanline: u8) -> Self {
        Self {
            ports,
            regs,
            start_scanline,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn enable(&mut self, offset: u16) {
        self.visible = true;
        self.write_reg(REG_CURSOR_START, self.start_scanline & 0x1f);
        self.sync(offset);
    }

    pub fn disable(&mut self) {
        self.visible = false;
        self.write_reg(REG_CURSOR_START, CURSOR_DISABLE);
    }

    /// Moves the hardware cursor to the linear cell `offset`. Does nothing
    /// while the cursor is hidden.
    pub fn sync(&mut self, offset: u16) {
        if !self.visible {
            return;
        }

        self.write_reg(REG_CURSOR_LOW, (offset & 0xff) as u8);
        self.write_reg(REG_CURSOR_HIGH, (offset >> 8) as u8);
    }

    pub fn ports(&self) -> &P {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut P {
        &mut self.ports
    }

    fn write_reg(&mut self, reg: u8, value: u8) {
        self.ports.write_byte(self.regs.index_port, reg);
        self.ports.write_byte(self.regs.data_port, value);
    }
}

#[cfg(test)]
mod tests {
    use crate::arch::vga::RecordingPorts;
    use crate::driver::config::CrtcRegisters;
    use crate::driver::cursor::HardwareCursor;

    fn cursor() -> HardwareCursor<RecordingPorts> {
        HardwareCursor::new(RecordingPorts::default(), CrtcRegisters::COLOR, 14)
    }

    #[test]
    fn it_writes_low_then_high_location_byte() {
        let mut cursor = cursor();
        cursor.enable(0);
        cursor.ports_mut().clear();

        cursor.sync(0x07cf);
        assert_eq!(
            cursor.ports().writes(),
            &[(0x3d4, 0x0f), (0x3d5, 0xcf), (0x3d4, 0x0e), (0x3d5, 0x07)]
        );
    }

    #[test]
    fn it_does_not_sync_while_hidden() {
        let mut cursor = cursor();
        cursor.sync(42);
        assert!(cursor.ports().writes().is_empty());

        cursor.disable();
        cursor.sync(42);
        assert_eq!(cursor.ports().writes(), &[(0x3d4, 0x0a), (0x3d5, 0x20)]);
        assert!(!cursor.is_visible());
    }

    #[test]
    fn it_restores_cursor_shape_when_enabled() {
        let mut cursor = cursor();
        cursor.enable(81);
        assert!(cursor.is_visible());
        assert_eq!(
            cursor.ports().writes(),
            &[
                (0x3d4, 0x0a), (0x3d5, 14),
                (0x3d4, 0x0f), (0x3d5, 81),
                (0x3d4, 0x0e), (0x3d5, 0),
            ]
        );
    }

    #[test]
    fn it_uses_configured_ports() {
        let regs = CrtcRegisters { index_port: 0x3b4, data_port: 0x3b5 };
        let mut cursor = HardwareCursor::new(RecordingPorts::default(), regs, 0);
        cursor.disable();
        assert_eq!(cursor.ports().writes(), &[(0x3b4, 0x0a), (0x3b5, 0x20)]);
    }
}
