/******************************************************************************
 * Copyright © 2021-2023 Kévin Lesénéchal <kevin.lesenechal@gmail.com>        *
 * This file is part of the Nucloid operating system.                         *
 *                                                                            *
 * Nucloid is free software; you can redistribute it and/or modify it under   *
 * the terms of the GNU General Public License as published by the Free       *
 * Software Foundation; either version 2 of the License, or (at your option)  *
 * any later version. See LICENSE file for more information.                  *
 ******************************************************************************/

///! Encoding of VGA text mode cells. A cell is a 16-bit word whose low byte is
///! the character code (in the card's code page) and whose high byte is the
///! attribute: background color in the high nibble, foreground color in the
///! low nibble.

/// The 16 colors of the standard VGA text mode palette.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGrey = 7,
    DarkGrey = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    LightBrown = 14,
    White = 15,
}

impl Color {
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Brown,
        Color::LightGrey,
        Color::DarkGrey,
        Color::LightBlue,
        Color::LightGreen,
        Color::LightCyan,
        Color::LightRed,
        Color::LightMagenta,
        Color::LightBrown,
        Color::White,
    ];

    pub const fn from_index(index: u8) -> Option<Color> {
        if index < 16 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }
}

/// The empty cell: a space with a black-on-black attribute.
pub const BLANK_CELL: u16 = make_cell(0x00, b' ');

/// Light grey on black, what the BIOS leaves behind.
pub const DEFAULT_STYLE: u8 = make_color(Color::LightGrey, Color::Black);

#[inline]
pub const fn make_color(fg: Color, bg: Color) -> u8 {
    fg as u8 | (bg as u8) << 4
}

#[inline]
pub const fn make_cell(attr: u8, c: u8) -> u16 {
    (attr as u16) << 8 | c as u16
}

#[inline]
pub const fn cell_attribute(cell: u16) -> u8 {
    (cell >> 8) as u8
}

#[inline]
pub const fn cell_char(cell: u16) -> u8 {
    (cell & 0xff) as u8
}

/// Returns the `(foreground, background)` palette indices of an attribute.
#[inline]
pub const fn split_attribute(attr: u8) -> (u8, u8) {
    (attr & 0x0f, attr >> 4)
}
