/******************************************************************************
 * Copyright © 2021-2023 Kévin Lesénéchal <kevin.lesenechal@gmail.com>        *
 * This file is part of the Nucloid operating system.                         *
 *                                                                            *
 * Nucloid is free software; you can redistribute it and/or modify it under   *
 * the terms of the GNU General Public License as published by the Free       *
 * Software Foundation; either version 2 of the License, or (at your option)  *
 * any later version. See LICENSE file for more information.                  *
 ******************************************************************************/

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use x86::bits64::rflags::{self, RFlags};

// FIXME: implement per SMP processor
static CRITICAL_REGION_DEPTH: AtomicU32 = AtomicU32::new(0);

/// Whether IRQs were enabled when the outermost critical region was entered.
/// The console may be used before the IDT is loaded, in which case leaving a
/// critical region must not turn interrupts on.
static IRQ_WERE_ENABLED: AtomicBool = AtomicBool::new(false);

pub fn push_critical_region() {
    let irq_enabled = rflags::read().contains(RFlags::FLAGS_IF);
    unsafe { x86::irq::disable() };

    let prev = CRITICAL_REGION_DEPTH.fetch_add(1, Ordering::SeqCst);
    if prev == 0 {
        IRQ_WERE_ENABLED.store(irq_enabled, Ordering::SeqCst);
    }
}

pub fn pop_critical_region() {
    let prev = CRITICAL_REGION_DEPTH.fetch_sub(1, Ordering::SeqCst);

    if prev == 1 && IRQ_WERE_ENABLED.load(Ordering::SeqCst) {
        unsafe { x86::irq::enable() };
    }
}
