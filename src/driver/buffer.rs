/******************************************************************************
 * Copyright © 2021-2023 Kévin Lesénéchal <kevin.lesenechal@gmail.com>        *
 * This file is part of the Nucloid operating system.                         *
 *                                                                            *
 * Nucloid is free software; you can redistribute it and/or modify it under   *
 * the terms of the GNU General Public License as published by the Free       *
 * Software Foundation; either version 2 of the License, or (at your option)  *
 * any later version. See LICENSE file for more information.                  *
 ******************************************************************************/

use core::ptr;
use core::slice;
use num_integer::Integer;

use crate::driver::color::{BLANK_CELL, cell_attribute, cell_char, make_cell};
use crate::driver::config::check_geometry;
use crate::driver::vga::VgaError;

/// The grid of text cells, row-major. Every access is volatile since the
/// backing memory is usually the video card's.
///
/// Positions handed to this type must lie within the grid; callers exposed to
/// the outside world validate them first. An out-of-range position panics on
/// the slice bounds check rather than touching memory past the grid.
pub struct TextBuffer<'a> {
    cells: &'a mut [u16],
    width: usize,
    height: usize,
}

impl<'a> TextBuffer<'a> {
    pub fn new(
        cells: &'a mut [u16],
        width: usize,
        height: usize,
    ) -> Result<Self, VgaError> {
        check_geometry(width, height)?;
        if cells.len() != width * height {
            return Err(VgaError::BufferSizeMismatch {
                expected: width * height,
                actual: cells.len(),
            });
        }

        Ok(Self { cells, width, height })
    }

    /// # Safety
    /// `addr` must point to `width * height` 16-bit cells, valid and not
    /// aliased for the lifetime `'a`.
    pub unsafe fn from_raw(
        addr: *mut u16,
        width: usize,
        height: usize,
    ) -> Result<Self, VgaError> {
        check_geometry(width, height)?;

        Ok(Self {
            cells: unsafe { slice::from_raw_parts_mut(addr, width * height) },
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn index_of(&self, col: usize, row: usize) -> usize {
        debug_assert!(col < self.width && row < self.height);
        row * self.width + col
    }

    /// Returns the `(col, row)` of a linear cell index.
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        let (row, col) = index.div_rem(&self.width);
        (col, row)
    }

    #[inline]
    pub fn read(&self, index: usize) -> u16 {
        unsafe { ptr::read_volatile(&self.cells[index]) }
    }

    #[inline]
    pub fn write(&mut self, index: usize, cell: u16) {
        unsafe { ptr::write_volatile(&mut self.cells[index], cell) }
    }

    pub fn cell_at(&self, col: usize, row: usize) -> u16 {
        self.read(self.index_of(col, row))
    }

    pub fn set_cell_at(&mut self, col: usize, row: usize, cell: u16) {
        let index = self.index_of(col, row);
        self.write(index, cell);
    }

    pub fn attribute_at(&self, col: usize, row: usize) -> u8 {
        cell_attribute(self.cell_at(col, row))
    }

    /// Replaces the attribute of a cell, keeping its character.
    pub fn set_attribute_at(&mut self, col: usize, row: usize, attr: u8) {
        let index = self.index_of(col, row);
        let c = cell_char(self.read(index));
        self.write(index, make_cell(attr, c));
    }

    pub fn clear_row(&mut self, row: usize) {
        let start = self.index_of(0, row);
        for index in start..(start + self.width) {
            self.write(index, BLANK_CELL);
        }
    }

    pub fn clear_all(&mut self) {
        for index in 0..self.cells.len() {
            self.write(index, BLANK_CELL);
        }
    }

    /// Moves every row up by `lines`, dropping the top ones and blanking the
    /// `lines` rows freed at the bottom.
    pub fn shift_up(&mut self, lines: usize) {
        let lines = lines.min(self.height);
        let start = lines * self.width;

        self.cells.copy_within(start.., 0);
        for row in (self.height - lines)..self.height {
            self.clear_row(row);
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = u16> + '_ {
        (0..self.cells.len()).map(|index| self.read(index))
    }
}
