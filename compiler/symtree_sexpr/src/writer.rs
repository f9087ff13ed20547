//! S-expression writer.

use std::io::{self, Write};

use symtree_ir::Tree;

/// Write the printed form of `tree` to `dst`, returning the number of bytes
/// written.
pub fn write_sexpr<W: io::Write + ?Sized>(dst: &mut W, tree: &Tree) -> io::Result<usize> {
    let mut counting = CountingWriter {
        inner: dst,
        written: 0,
    };
    write!(counting, "{tree}")?;
    Ok(counting.written)
}

/// The printed form of `tree` as a `String`.
pub fn to_sexpr(tree: &Tree) -> String {
    tree.to_string()
}

struct CountingWriter<'w, W: ?Sized> {
    inner: &'w mut W,
    written: usize,
}

impl<W: io::Write + ?Sized> io::Write for CountingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
