//! Pointers command implementation
//!
//! Walks `[1, 3, 5, 7, 9]` with an [`OffsetCursor`], showing reads, writes
//! and a refused out-of-bounds move.

use std::io::Write;

use lattice_core::cursor::OffsetCursor;
use lattice_core::display::write_row;

use crate::Result;

/// Run the pointers command
pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let mut values = [1, 3, 5, 7, 9];
    writeln!(out, "Array:")?;
    write_row(out, &values)?;

    {
        let mut cursor = OffsetCursor::at_start(&mut values)?;
        writeln!(out, "Cursor at {} reads {}", cursor.position(), cursor.get())?;

        cursor.advance(2)?;
        writeln!(
            out,
            "After advancing by 2: position {}, value {}, distance from start {}",
            cursor.position(),
            cursor.get(),
            cursor.distance_from_start()
        )?;

        match cursor.peek(1) {
            Some(next) => writeln!(out, "Next element is {}", next)?,
            None => writeln!(out, "No next element")?,
        }

        *cursor.get_mut() *= 10;
        writeln!(out, "Multiplied the current element by 10: {}", cursor.get())?;

        cursor.advance(-1)?;
        cursor.set(-3);
        writeln!(out, "Stepped back and stored {}", cursor.get())?;

        if let Err(e) = cursor.advance(-2) {
            writeln!(out, "Refused move: {}", e)?;
        }
        writeln!(out, "Cursor stays at {}", cursor.position())?;
    }

    writeln!(out, "Array after the walk:")?;
    write_row(out, &values)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("Cursor at 0 reads 1\n"));
        assert!(output.contains("position 2, value 5, distance from start 2\n"));
        assert!(output.contains("Next element is 7\n"));
        assert!(output.contains("Refused move"));
        assert!(output.contains("Cursor stays at 1\n"));
        assert!(output.ends_with("1 -3 50 7 9\n"));
    }
}
