/******************************************************************************
 * Copyright © 2021-2023 Kévin Lesénéchal <kevin.lesenechal@gmail.com>        *
 * This file is part of the Nucloid operating system.                         *
 *                                                                            *
 * Nucloid is free software; you can redistribute it and/or modify it under   *
 * the terms of the GNU General Public License as published by the Free       *
 * Software Foundation; either version 2 of the License, or (at your option)  *
 * any later version. See LICENSE file for more information.                  *
 ******************************************************************************/

use core::ops::{Deref, DerefMut};
use core::sync::atomic::{AtomicBool, Ordering};
use core::cell::UnsafeCell;

use crate::arch::sync::{push_critical_region, pop_critical_region};

/// A spinning mutual exclusion lock. Holding the guard keeps the CPU in a
/// critical region, so an interrupt handler cannot preempt the holder and
/// spin forever on the same lock.
pub struct Spinlock<T> {
    lock: AtomicBool,
    data: UnsafeCell<T>,
}

unsafe impl<T: Send> Sync for Spinlock<T> {}
unsafe impl<T: Send> Send for Spinlock<T> {}

impl<T> Spinlock<T> {
    pub const fn new(value: T) -> Self {
        Self {
            lock: AtomicBool::new(false),
            data: UnsafeCell::new(value),
        }
    }

    pub fn lock(&self) -> SpinlockGuard<'_, T> {
        loop {
            if let Some(guard) = self.try_lock() {
                return guard;
            }
            while self.is_locked() {
                core::hint::spin_loop();
            }
        }
    }

    /// Acquires the lock only if nobody holds it. Used on paths that may be
    /// reached while the current CPU already owns the lock (e.g. logging from
    /// within the console).
    pub fn try_lock(&self) -> Option<SpinlockGuard<'_, T>> {
        push_critical_region();
        if self.lock.compare_exchange(false, true,
                                      Ordering::Acquire,
                                      Ordering::Relaxed).is_err() {
            pop_critical_region();
            return None;
        }

        // Safety: The spinlock guarantees exclusive access to the resource
        // wrapped inside it, we just acquired the lock, we are the only owner
        // of the resource so we can create a mutable reference to it.
        let data = unsafe { &mut *self.data.get() };

        Some(SpinlockGuard {
            lock: &self.lock,
            data,
        })
    }

    /// Checks whether the lock is held right now, without any lock or
    /// synchronization.
    pub fn is_locked(&self) -> bool {
        self.lock.load(Ordering::Relaxed)
    }
}

pub struct SpinlockGuard<'a, T> {
    lock: &'a AtomicBool,
    data: &'a mut T,
}

impl<T> Deref for SpinlockGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.data
    }
}

impl<T> DerefMut for SpinlockGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.data
    }
}

impl<T> Drop for SpinlockGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.store(false, Ordering::Release);
        pop_critical_region();
    }
}

#[cfg(test)]
mod tests {
    use crate::sync::Spinlock;

    #[test]
    fn it_refuses_a_second_owner() {
        let lock = Spinlock::new(3u8);
        let mut guard = lock.lock();
        *guard += 1;

        assert!(lock.is_locked());
        assert!(lock.try_lock().is_none());
        drop(guard);

        assert!(!lock.is_locked());
        assert_eq!(*lock.try_lock().unwrap(), 4);
    }
}
