/******************************************************************************
 * Copyright © 2021 Kévin Lesénéchal <kevin.lesenechal@gmail.com>             *
 * This file is part of the Nucloid operating system.                         *
 *                                                                            *
 * Nucloid is free software; you can redistribute it and/or modify it under   *
 * the terms of the GNU General Public License as published by the Free       *
 * Software Foundation; either version 2 of the License, or (at your option)  *
 * any later version. See LICENSE file for more information.                  *
 ******************************************************************************/

use core::ffi::CStr;
use thiserror_no_std::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum VgaError {
    #[error("invalid text grid geometry {width}x{height}")]
    InvalidGeometry { width: usize, height: usize },

    #[error("text buffer holds {actual} cells, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("position ({col}, {row}) is outside the text grid")]
    OutOfBounds { col: usize, row: usize },

    #[error("the kernel console is not initialized")]
    NotInitialized,
}

/// A read-only view over a byte string. Consumers stop at the end of the
/// slice or at the first NUL byte, whichever comes first.
pub trait TextSource {
    fn data(&self) -> &[u8];
}

impl TextSource for str {
    fn data(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TextSource for [u8] {
    fn data(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> TextSource for [u8; N] {
    fn data(&self) -> &[u8] {
        self
    }
}

impl TextSource for CStr {
    fn data(&self) -> &[u8] {
        self.to_bytes()
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn data(&self) -> &[u8] {
        (**self).data()
    }
}

/// Iterates over the bytes of `text` up to its first NUL.
pub(crate) fn text_bytes<T: TextSource + ?Sized>(
    text: &T,
) -> impl Iterator<Item = u8> + '_ {
    text.data().iter().copied().take_while(|&b| b != 0)
}

pub trait VgaScreen: core::fmt::Write {
    fn put_char(&mut self, c: u8);

    fn print<T: TextSource + ?Sized>(&mut self, text: &T) {
        for c in text_bytes(text) {
            self.put_char(c);
        }
    }

    fn println<T: TextSource + ?Sized>(&mut self, text: &T) {
        self.print(text);
        self.advance_line();
    }

    fn advance_line(&mut self);

    fn delete_chars(&mut self, count: usize);

    fn delete_lines(&mut self, count: usize);

    fn active_style(&self) -> u8;

    fn set_active_style(&mut self, attr: u8);

    fn move_cursor(&mut self, col: usize, row: usize) -> Result<(), VgaError>;

    fn cursor(&self) -> (usize, usize);

    fn enable_cursor(&mut self);

    fn disable_cursor(&mut self);

    fn scroll_up(&mut self, lines: usize);

    fn reset(&mut self);
}
