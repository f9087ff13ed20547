//! Reader errors.

/// Why the reader could not produce a form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// There was no form left to read, only whitespace or nothing at all.
    #[error("end of input")]
    Eof,

    /// Input ended inside a list.
    #[error("unexpected end of input: list opened at byte {open} is not closed")]
    UnexpectedEof { open: usize },

    /// A `)` appeared where a form was expected.
    #[error("unexpected `)` at byte {offset}")]
    UnexpectedCloseParen { offset: usize },
}

impl ReadError {
    /// True for [`ReadError::Eof`], the clean "nothing left" condition.
    pub const fn is_clean_eof(&self) -> bool {
        matches!(self, ReadError::Eof)
    }
}
