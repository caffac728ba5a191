/******************************************************************************
 * Copyright © 2021-2023 Kévin Lesénéchal <kevin.lesenechal@gmail.com>        *
 * This file is part of the Nucloid operating system.                         *
 *                                                                            *
 * Nucloid is free software; you can redistribute it and/or modify it under   *
 * the terms of the GNU General Public License as published by the Free       *
 * Software Foundation; either version 2 of the License, or (at your option)  *
 * any later version. See LICENSE file for more information.                  *
 ******************************************************************************/

use x86::io::outb;

use crate::driver::config::CrtcRegisters;
use crate::driver::cursor::PortIo;

/// Direct access to the CRT controller's index/data ports.
pub struct CrtcPorts {
    regs: CrtcRegisters,
}

impl CrtcPorts {
    /// # Safety
    /// The ports in `regs` must be those of the VGA CRT controller, and no
    /// one else may program it concurrently.
    pub unsafe fn new(regs: CrtcRegisters) -> Self {
        Self { regs }
    }
}

impl PortIo for CrtcPorts {
    fn write_byte(&mut self, port: u16, value: u8) {
        debug_assert!(port == self.regs.index_port || port == self.regs.data_port);

        unsafe {
            outb(port, value);
        }
    }
}
