//! Recursive-descent s-expression reader.

use symtree_ir::Tree;
use tracing::trace;

use crate::cursor::Cursor;
use crate::ReadError;

/// Reads successive top-level forms from a string.
///
/// Each call to [`read`](Self::read) consumes exactly one form plus the
/// whitespace before it. Whatever follows is left for the next call.
///
/// ```
/// use symtree_sexpr::Reader;
/// use symtree_ir::Tree;
///
/// let mut reader = Reader::new("(+ 13 x) rest");
/// let tree = reader.read()?;
/// assert_eq!(tree, Tree::list([Tree::symbol("+"), Tree::number(13), Tree::symbol("x")]));
/// assert_eq!(reader.rest(), " rest");
/// # Ok::<(), symtree_sexpr::ReadError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Reader<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Reader<'src> {
    pub fn new(src: &'src str) -> Self {
        Reader {
            cursor: Cursor::new(src),
        }
    }

    /// Read the next top-level form.
    ///
    /// Returns [`ReadError::Eof`] when only whitespace remains.
    pub fn read(&mut self) -> Result<Tree, ReadError> {
        let tree = self.form()?;
        trace!(%tree, offset = self.cursor.pos(), "read form");
        Ok(tree)
    }

    /// The input not yet consumed.
    pub fn rest(&self) -> &'src str {
        self.cursor.rest()
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.cursor.pos()
    }

    fn form(&mut self) -> Result<Tree, ReadError> {
        self.cursor.skip_whitespace();
        match self.cursor.current() {
            None => Err(ReadError::Eof),
            Some('(') => self.list(),
            Some(')') => {
                let offset = self.cursor.pos();
                self.cursor.advance();
                Err(ReadError::UnexpectedCloseParen { offset })
            }
            Some(_) => Ok(self.atom()),
        }
    }

    fn list(&mut self) -> Result<Tree, ReadError> {
        let open = self.cursor.pos();
        self.cursor.advance();

        let mut elements = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            match self.cursor.current() {
                None => return Err(ReadError::UnexpectedEof { open }),
                Some(')') => {
                    self.cursor.advance();
                    return Ok(Tree::list(elements));
                }
                Some(_) => elements.push(self.form()?),
            }
        }
    }

    fn atom(&mut self) -> Tree {
        let text = self.cursor.eat_while(is_atom_char);
        match text.parse::<i64>() {
            Ok(value) => Tree::number(value),
            Err(_) => Tree::symbol(text),
        }
    }
}

/// Yields forms until the input is exhausted or a read fails.
impl Iterator for Reader<'_> {
    type Item = Result<Tree, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read() {
            Err(ReadError::Eof) => None,
            result => Some(result),
        }
    }
}

fn is_atom_char(chr: char) -> bool {
    !chr.is_whitespace() && chr != ')'
}

/// Read the first form of `src`. Anything after it is ignored.
pub fn read_sexpr(src: &str) -> Result<Tree, ReadError> {
    Reader::new(src).read()
}

/// Read every form of `src`.
pub fn read_all(src: &str) -> Result<Vec<Tree>, ReadError> {
    Reader::new(src).collect()
}

#[cfg(test)]
mod tests;
