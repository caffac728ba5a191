/******************************************************************************
 * Copyright © 2021-2023 Kévin Lesénéchal <kevin.lesenechal@gmail.com>        *
 * This file is part of the Nucloid operating system.                         *
 *                                                                            *
 * Nucloid is free software; you can redistribute it and/or modify it under   *
 * the terms of the GNU General Public License as published by the Free       *
 * Software Foundation; either version 2 of the License, or (at your option)  *
 * any later version. See LICENSE file for more information.                  *
 ******************************************************************************/

use arrayvec::ArrayVec;
use core::fmt;

use crate::debug;
use crate::driver::buffer::TextBuffer;
use crate::driver::color::{BLANK_CELL, Color, cell_char, make_cell, make_color};
use crate::driver::config::{ConsoleConfig, MAX_COLUMNS};
use crate::driver::cursor::{HardwareCursor, PortIo};
use crate::driver::vga::{TextSource, VgaError, VgaScreen, text_bytes};

const BACKSPACE: u8 = 0x08;

/// A VGA text mode console: a grid of cells, a logical cursor kept in sync
/// with the CRTC one, and the attribute applied to unstyled output.
///
/// The logical cursor always lies within the grid between two calls. Output
/// reaching the end of a row wraps to the next one, and going past the last
/// row scrolls the whole grid up by one row.
pub struct VgaConsole<'a, P> {
    buffer: TextBuffer<'a>,
    cursor: HardwareCursor<P>,
    col: usize,
    row: usize,
    style: u8,
}

impl<'a, P: PortIo> VgaConsole<'a, P> {
    pub fn new(buffer: TextBuffer<'a>, ports: P, config: &ConsoleConfig) -> Self {
        let mut console = Self {
            buffer,
            cursor: HardwareCursor::new(
                ports,
                config.crtc,
                config.cursor_start_scanline,
            ),
            col: 0,
            row: 0,
            style: config.default_style,
        };

        if config.clear_on_init {
            console.buffer.clear_all();
        }
        if config.cursor_visible {
            console.enable_cursor();
        } else {
            console.disable_cursor();
        }

        console
    }

    /// Builds a console over the cells at `config.base_addr`.
    ///
    /// # Safety
    /// `config.base_addr` must map `config.nr_cells()` text cells that nothing
    /// else accesses for the lifetime `'a`.
    pub unsafe fn from_config(
        config: &ConsoleConfig,
        ports: P,
    ) -> Result<Self, VgaError> {
        let buffer = unsafe {
            TextBuffer::from_raw(
                config.base_addr as *mut u16,
                config.width,
                config.height,
            )?
        };

        Ok(Self::new(buffer, ports, config))
    }

    /// Builds a console over an in-memory grid sized after `config`.
    pub fn with_cells(
        cells: &'a mut [u16],
        ports: P,
        config: &ConsoleConfig,
    ) -> Result<Self, VgaError> {
        let buffer = TextBuffer::new(cells, config.width, config.height)?;
        Ok(Self::new(buffer, ports, config))
    }

    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor.is_visible()
    }

    pub fn ports(&self) -> &P {
        self.cursor.ports()
    }

    pub fn ports_mut(&mut self) -> &mut P {
        self.cursor.ports_mut()
    }

    pub fn set_colors(&mut self, fg: Color, bg: Color) {
        self.style = make_color(fg, bg);
    }

    /// Pushes the logical cursor position to the CRTC, if the cursor is
    /// visible.
    pub fn sync_cursor(&mut self) {
        let offset = self.cursor_offset();
        self.cursor.sync(offset);
    }

    pub fn char_at(&self, col: usize, row: usize) -> Result<u8, VgaError> {
        self.check_position(col, row)?;
        Ok(cell_char(self.buffer.cell_at(col, row)))
    }

    pub fn attribute_at(&self, col: usize, row: usize) -> Result<u8, VgaError> {
        self.check_position(col, row)?;
        Ok(self.buffer.attribute_at(col, row))
    }

    /// Changes the colors of a cell without altering its character.
    pub fn set_attribute_at(
        &mut self,
        col: usize,
        row: usize,
        attr: u8,
    ) -> Result<(), VgaError> {
        self.check_position(col, row)?;
        self.buffer.set_attribute_at(col, row, attr);
        Ok(())
    }

    /// Writes `text` with `style` starting at `(col, row)`, independently of
    /// the console's cursor and active style, neither of which is modified.
    ///
    /// A `\n` continues on the next row at column `col`; `\b` and `\t` are
    /// ignored. What does not fit on a row is clipped, and writing stops at
    /// the bottom of the grid or at the first NUL byte.
    pub fn set_chars_at<T: TextSource + ?Sized>(
        &mut self,
        col: usize,
        row: usize,
        text: &T,
        style: u8,
    ) -> Result<(), VgaError> {
        if let Err(e) = self.check_position(col, row) {
            debug!("vga: rejected overlay write at ({}, {})", col, row);
            return Err(e);
        }

        let (mut x, mut y) = (col, row);
        for c in text_bytes(text) {
            match c {
                b'\n' => {
                    x = col;
                    y += 1;
                    if y >= self.height() {
                        break;
                    }
                }
                BACKSPACE | b'\t' => (),
                _ if x < self.width() => {
                    self.buffer.set_cell_at(x, y, make_cell(style, c));
                    x += 1;
                }
                _ => (),
            }
        }

        Ok(())
    }

    /// Returns the characters of a row.
    pub fn read_row(&self, row: usize) -> Result<ArrayVec<u8, MAX_COLUMNS>, VgaError> {
        self.check_position(0, row)?;
        Ok((0..self.width())
            .map(|col| cell_char(self.buffer.cell_at(col, row)))
            .collect())
    }

    fn check_position(&self, col: usize, row: usize) -> Result<(), VgaError> {
        if col < self.width() && row < self.height() {
            Ok(())
        } else {
            Err(VgaError::OutOfBounds { col, row })
        }
    }

    fn cursor_offset(&self) -> u16 {
        // The geometry is checked so that every cell index fits in 16 bits.
        (self.row * self.width() + self.col) as u16
    }
}

impl<'a, P: PortIo> VgaScreen for VgaConsole<'a, P> {
    fn put_char(&mut self, c: u8) {
        match c {
            b'\n' => self.advance_line(),
            b'\t' => (),
            BACKSPACE => self.delete_chars(1),
            _ => {
                self.buffer.set_cell_at(self.col, self.row, make_cell(self.style, c));
                self.col += 1;
                if self.col >= self.width() {
                    self.advance_line();
                }
            }
        }

        self.sync_cursor();
    }

    fn advance_line(&mut self) {
        self.col = 0;
        self.row += 1;

        if self.row >= self.height() {
            self.scroll_up(self.row - self.height() + 1);
        }

        self.sync_cursor();
    }

    fn delete_chars(&mut self, count: usize) {
        for _ in 0..count.min(self.col) {
            self.col -= 1;
            self.buffer.set_cell_at(self.col, self.row, BLANK_CELL);
        }

        self.sync_cursor();
    }

    fn delete_lines(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        let cleared = count.min(self.row);
        for _ in 0..cleared {
            self.row -= 1;
            self.buffer.clear_row(self.row);
        }

        self.col = 0;
        if count <= cleared {
            self.row += 1;
        }

        self.sync_cursor();
    }

    fn active_style(&self) -> u8 {
        self.style
    }

    fn set_active_style(&mut self, attr: u8) {
        self.style = attr;
    }

    fn move_cursor(&mut self, col: usize, row: usize) -> Result<(), VgaError> {
        self.check_position(col, row)?;
        self.col = col;
        self.row = row;
        self.sync_cursor();

        Ok(())
    }

    fn cursor(&self) -> (usize, usize) {
        (self.col, self.row)
    }

    fn enable_cursor(&mut self) {
        let offset = self.cursor_offset();
        self.cursor.enable(offset);
    }

    fn disable_cursor(&mut self) {
        self.cursor.disable();
    }

    fn scroll_up(&mut self, lines: usize) {
        let lines = lines.min(self.height());

        self.buffer.shift_up(lines);
        self.row = self.row.saturating_sub(lines);
        self.sync_cursor();
    }

    fn reset(&mut self) {
        self.buffer.clear_all();
        self.col = 0;
        self.row = 0;
        self.sync_cursor();
    }
}

impl<'a, P: PortIo> fmt::Write for VgaConsole<'a, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if c.is_ascii() {
                self.put_char(c as u8);
            } else {
                self.put_char(b'?');
            }
        }

        Ok(())
    }
}
