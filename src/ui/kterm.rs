/******************************************************************************
 * Copyright © 2021-2023 Kévin Lesénéchal <kevin.lesenechal@gmail.com>        *
 * This file is part of the Nucloid operating system.                         *
 *                                                                            *
 * Nucloid is free software; you can redistribute it and/or modify it under   *
 * the terms of the GNU General Public License as published by the Free       *
 * Software Foundation; either version 2 of the License, or (at your option)  *
 * any later version. See LICENSE file for more information.                  *
 ******************************************************************************/

use core::fmt::{Arguments, Write};

use crate::arch::vga::{PlatformPorts, crtc_ports};
use crate::driver::color::{Color, make_color};
use crate::driver::config::ConsoleConfig;
use crate::driver::console::VgaConsole;
use crate::driver::vga::{VgaError, VgaScreen};
use crate::logging::{Logger, Severity};
use crate::sync::Spinlock;
use crate::{error, info};

pub static KERNEL_CONSOLE: Spinlock<Option<VgaConsole<'static, PlatformPorts>>> =
    Spinlock::new(None);

/// Takes ownership of the text buffer and CRT controller described by
/// `config` and makes them the kernel console.
///
/// # Safety
/// `config.base_addr` must map the text buffer for the rest of the kernel's
/// lifetime, and nothing else may access it nor program the CRTC ports.
pub unsafe fn init(config: &ConsoleConfig) -> Result<(), VgaError> {
    if let Err(e) = config.validate() {
        error!("vga: unusable console configuration: {}", e);
        return Err(e);
    }

    let console = unsafe {
        VgaConsole::from_config(config, crtc_ports(config.crtc))?
    };
    *KERNEL_CONSOLE.lock() = Some(console);

    info!(
        "vga: {}x{} text console at {:#x}",
        config.width, config.height, config.base_addr
    );

    Ok(())
}

/// Runs `f` on the kernel console, holding its lock.
pub fn with_console<R, F>(f: F) -> Result<R, VgaError>
    where F: FnOnce(&mut VgaConsole<'static, PlatformPorts>) -> R
{
    let mut kcon = KERNEL_CONSOLE.lock();
    match *kcon {
        Some(ref mut kcon) => Ok(f(kcon)),
        None => Err(VgaError::NotInitialized),
    }
}

/// Mirrors log records on the kernel console, after handing them to the
/// downstream logger (usually the serial port).
pub struct ConsoleLogger {
    downstream: Option<&'static mut (dyn Logger + Send)>,
}

impl ConsoleLogger {
    pub fn new(downstream: Option<&'static mut (dyn Logger + Send)>) -> Self {
        Self { downstream }
    }
}

impl Logger for ConsoleLogger {
    fn log(&mut self, severity: Severity, args: Arguments) {
        if let Some(ref mut downstream) = self.downstream {
            downstream.log(severity, args);
        }

        let (color, severity_str) = match severity {
            Severity::Debug => (Color::DarkGrey, "debug"),
            Severity::Info => (Color::LightGrey, "info"),
            Severity::Notice => (Color::White, "notice"),
            Severity::Warning => (Color::LightBrown, "warning"),
            Severity::Error => (Color::Red, "error"),
            Severity::Critical => (Color::LightRed, "critic."),
            Severity::Alert => (Color::LightRed, "ALERT"),
            Severity::Emergency => (Color::LightRed, "EMERG."),
        };

        // The console may already be locked by this very CPU if the record
        // comes from console code; the mirror is skipped then.
        let Some(mut kcon) = KERNEL_CONSOLE.try_lock() else {
            return;
        };
        if let Some(ref mut kcon) = *kcon {
            let style = kcon.active_style();
            kcon.set_colors(color, Color::Black);
            let _ = write!(kcon, "{:>7}: ", severity_str);
            kcon.set_active_style(style);
            let _ = kcon.write_fmt(args);
            kcon.advance_line();
        }
    }
}

pub fn _print(args: Arguments) {
    let mut kcon = KERNEL_CONSOLE.lock();
    if let Some(ref mut kcon) = *kcon {
        let _ = kcon.write_fmt(args);
    }
}

/// Prints `args` in white on red, e.g. for a panic banner.
pub fn _print_alert(args: Arguments) {
    let mut kcon = KERNEL_CONSOLE.lock();
    if let Some(ref mut kcon) = *kcon {
        let style = kcon.active_style();
        kcon.set_active_style(make_color(Color::White, Color::Red));
        let _ = kcon.write_fmt(args);
        kcon.set_active_style(style);
    }
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::ui::kterm::_print(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! println {
    () => { $crate::print!("\n") };
    ($($arg:tt)*) => {
        $crate::print!("{}\n", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! aprint {
    ($($arg:tt)*) => {
        $crate::ui::kterm::_print_alert(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! aprintln {
    () => { $crate::print!("\n") };
    ($($arg:tt)*) => {
        $crate::aprint!("{}\n", format_args!($($arg)*))
    };
}
