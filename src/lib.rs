/******************************************************************************
 * Copyright © 2021-2023 Kévin Lesénéchal <kevin.lesenechal@gmail.com>        *
 * This file is part of the Nucloid operating system.                         *
 *                                                                            *
 * Nucloid is free software; you can redistribute it and/or modify it under   *
 * the terms of the GNU General Public License as published by the Free       *
 * Software Foundation; either version 2 of the License, or (at your option)  *
 * any later version. See LICENSE file for more information.                  *
 ******************************************************************************/

#![cfg_attr(not(test), no_std)]

#![allow(unused_unsafe)]

pub mod arch;
pub mod driver;
pub mod logging;
pub mod sync;
pub mod ui;

pub use crate::driver::color::Color;
pub use crate::driver::config::{ConsoleConfig, CrtcRegisters};
pub use crate::driver::console::VgaConsole;
pub use crate::driver::cursor::PortIo;
pub use crate::driver::vga::{TextSource, VgaError, VgaScreen};
