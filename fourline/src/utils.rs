//! Miscellaneous project utilities.

use crate::{HEIGHT, WIDTH};
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format 42 characters into a pretty grid format, top row first.
/// `piece_iter` must yield exactly 42 items.
pub fn format_grid<T: Iterator<Item = char>>(mut piece_iter: T, f: &mut Formatter) -> fmt::Result {
    for col in 0..WIDTH {
        write!(f, " {}", col + 1)?;
    }

    for _ in 0..HEIGHT {
        write!(f, "\n")?;
        for _ in 0..WIDTH {
            write!(f, " {}", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
