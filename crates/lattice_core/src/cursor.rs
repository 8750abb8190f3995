//! Offset navigation over contiguous memory.
//!
//! Every element of an array lives directly after the previous one, so a
//! handle to one element plus an integer offset reaches any other. An
//! [`OffsetCursor`] is that handle: a position into a borrowed slice that
//! moves by signed offsets. Unlike a raw pointer, a move that would leave the
//! slice is refused and the cursor stays where it was.
//!
//! ```text
//!   < 1 >< 3 >< 5 >< 7 >< 9 >
//!          ^
//!          cursor (position 1)
//! ```

use crate::error::{LatticeError, Result};

/// Checked position into a mutable slice.
///
/// # Examples
///
/// ```rust
/// use lattice_core::cursor::OffsetCursor;
///
/// let mut arr = [1, 3, 5, 7, 9];
/// let mut cursor = OffsetCursor::at(&mut arr, 1).unwrap();
/// assert_eq!(*cursor.get(), 3);
///
/// cursor.advance(1).unwrap();
/// assert_eq!(*cursor.get(), 5);
///
/// cursor.advance(-2).unwrap();
/// assert_eq!(cursor.position(), 0);
///
/// assert!(cursor.advance(-1).is_err());
/// assert_eq!(cursor.position(), 0);
/// ```
#[derive(Debug)]
pub struct OffsetCursor<'a, T> {
    buffer: &'a mut [T],
    position: usize,
}

impl<'a, T> OffsetCursor<'a, T> {
    /// Cursor at the first element; the array's own handle.
    ///
    /// # Errors
    ///
    /// [`LatticeError::OffsetOutOfBounds`] for an empty slice, which has no
    /// first element.
    pub fn at_start(buffer: &'a mut [T]) -> Result<Self> {
        Self::at(buffer, 0)
    }

    /// Cursor at `position`.
    ///
    /// # Errors
    ///
    /// [`LatticeError::OffsetOutOfBounds`] if `position` is not an element of
    /// `buffer`.
    pub fn at(buffer: &'a mut [T], position: usize) -> Result<Self> {
        if position >= buffer.len() {
            return Err(LatticeError::OffsetOutOfBounds {
                position: 0,
                offset: isize::try_from(position).unwrap_or(isize::MAX),
                len: buffer.len(),
            });
        }
        Ok(Self { buffer, position })
    }

    /// Current element index.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Elements between the start of the buffer and the cursor.
    #[inline]
    pub fn distance_from_start(&self) -> usize {
        self.position
    }

    /// Length of the underlying buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always `false`; a cursor cannot exist over an empty buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Moves by `offset` elements (negative moves toward the start).
    ///
    /// # Errors
    ///
    /// [`LatticeError::OffsetOutOfBounds`] if the target lies outside the
    /// buffer; the position is unchanged.
    pub fn advance(&mut self, offset: isize) -> Result<()> {
        let target = self
            .position
            .checked_add_signed(offset)
            .filter(|&target| target < self.buffer.len())
            .ok_or(LatticeError::OffsetOutOfBounds {
                position: self.position,
                offset,
                len: self.buffer.len(),
            })?;
        self.position = target;
        Ok(())
    }

    /// The element under the cursor.
    #[inline]
    pub fn get(&self) -> &T {
        &self.buffer[self.position]
    }

    /// Mutable access to the element under the cursor.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.buffer[self.position]
    }

    /// Overwrites the element under the cursor.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.buffer[self.position] = value;
    }

    /// Element `offset` away without moving, or `None` outside the buffer.
    pub fn peek(&self, offset: isize) -> Option<&T> {
        self.position
            .checked_add_signed(offset)
            .and_then(|target| self.buffer.get(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_first_element() {
        let mut arr = [1, 3, 5, 7, 9];
        let cursor = OffsetCursor::at_start(&mut arr).unwrap();
        assert_eq!(cursor.position(), 0);
        assert_eq!(*cursor.get(), 1);
        assert_eq!(cursor.len(), 5);
    }

    #[test]
    fn test_empty_buffer_rejected() {
        let mut empty: [i32; 0] = [];
        assert!(matches!(
            OffsetCursor::at_start(&mut empty),
            Err(LatticeError::OffsetOutOfBounds { len: 0, .. })
        ));
    }

    #[test]
    fn test_walk_and_write() {
        let mut arr = [1, 3, 5, 7, 9];
        {
            let mut cursor = OffsetCursor::at(&mut arr, 1).unwrap();
            cursor.set(30);
            cursor.advance(1).unwrap();
            *cursor.get_mut() += 45;
            cursor.advance(-2).unwrap();
            assert_eq!(cursor.distance_from_start(), 0);
        }
        assert_eq!(arr, [1, 30, 50, 7, 9]);
    }

    #[test]
    fn test_out_of_bounds_move_is_refused() {
        let mut arr = [1, 3, 5, 7, 9];
        let mut cursor = OffsetCursor::at(&mut arr, 4).unwrap();

        let err = cursor.advance(1).unwrap_err();
        assert_eq!(
            err,
            LatticeError::OffsetOutOfBounds {
                position: 4,
                offset: 1,
                len: 5
            }
        );
        assert_eq!(cursor.position(), 4);
        assert!(cursor.advance(-5).is_err());
        assert!(cursor.advance(isize::MIN).is_err());
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_peek() {
        let mut arr = [1, 3, 5];
        let cursor = OffsetCursor::at(&mut arr, 1).unwrap();
        assert_eq!(cursor.peek(-1), Some(&1));
        assert_eq!(cursor.peek(1), Some(&5));
        assert_eq!(cursor.peek(2), None);
        assert_eq!(cursor.peek(-2), None);
    }
}
