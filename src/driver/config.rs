/******************************************************************************
 * Copyright © 2021-2023 Kévin Lesénéchal <kevin.lesenechal@gmail.com>        *
 * This file is part of the Nucloid operating system.                         *
 *                                                                            *
 * Nucloid is free software; you can redistribute it and/or modify it under   *
 * the terms of the GNU General Public License as published by the Free       *
 * Software Foundation; either version 2 of the License, or (at your option)  *
 * any later version. See LICENSE file for more information.                  *
 ******************************************************************************/

use crate::driver::color::DEFAULT_STYLE;
use crate::driver::vga::VgaError;

pub const VGA_TEXT_BUFFER_ADDR: usize = 0x000b_8000;

/// Widest text mode the console handles (VESA 132-column modes).
pub const MAX_COLUMNS: usize = 132;

/// The CRTC location register is 16 bits wide.
const MAX_CELLS: usize = 0x1_0000;

/// I/O ports of the CRT controller's index/data register pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CrtcRegisters {
    pub index_port: u16,
    pub data_port: u16,
}

impl CrtcRegisters {
    /// Color adapters; monochrome ones decode 0x3b4/0x3b5 instead.
    pub const COLOR: Self = Self {
        index_port: 0x03d4,
        data_port: 0x03d5,
    };
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub base_addr: usize,
    pub width: usize,
    pub height: usize,
    pub crtc: CrtcRegisters,
    pub default_style: u8,
    pub cursor_visible: bool,

    /// First scanline of the blinking cursor, 0 being the top of the glyph.
    pub cursor_start_scanline: u8,

    pub clear_on_init: bool,
}

impl ConsoleConfig {
    /// BIOS mode 3: 80×25 cells, 16 colors, underline cursor.
    pub const VGA_TEXT_MODE_3: Self = Self {
        base_addr: VGA_TEXT_BUFFER_ADDR,
        width: 80,
        height: 25,
        crtc: CrtcRegisters::COLOR,
        default_style: DEFAULT_STYLE,
        cursor_visible: true,
        cursor_start_scanline: 14,
        clear_on_init: false,
    };

    pub fn nr_cells(&self) -> usize {
        self.width * self.height
    }

    pub fn validate(&self) -> Result<(), VgaError> {
        check_geometry(self.width, self.height)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::VGA_TEXT_MODE_3
    }
}

pub(crate) fn check_geometry(width: usize, height: usize) -> Result<(), VgaError> {
    let fits = width > 0
        && width <= MAX_COLUMNS
        && height > 0
        && width.checked_mul(height).is_some_and(|n| n <= MAX_CELLS);

    if fits {
        Ok(())
    } else {
        Err(VgaError::InvalidGeometry { width, height })
    }
}

#[cfg(test)]
mod tests {
    use crate::driver::config::*;
    use crate::driver::vga::VgaError;

    #[test]
    fn it_accepts_the_standard_mode() {
        let config = ConsoleConfig::default();
        assert_eq!(config, ConsoleConfig::VGA_TEXT_MODE_3);
        assert_eq!(config.nr_cells(), 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn it_rejects_unusable_geometries() {
        for (width, height) in [(0, 25), (80, 0), (133, 25), (132, 497)] {
            let config = ConsoleConfig { width, height, ..Default::default() };
            assert_eq!(
                config.validate(),
                Err(VgaError::InvalidGeometry { width, height })
            );
        }
        assert!(check_geometry(132, 496).is_ok());
    }
}
