//! Character cursor over the reader's source text.
//!
//! The cursor only moves forward, one `char` at a time, and always sits on a
//! character boundary. Slices taken between two positions are therefore
//! valid `&str`s borrowed from the source.

/// Forward-only cursor over a `&str`.
///
/// The cursor is [`Copy`], so a caller can snapshot a position cheaply.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    /// Byte offset of the current character.
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    /// The character at the current position, or `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance past the current character. No-op at end of input.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if let Some(chr) = self.current() {
            self.pos += chr.len_utf8();
        }
    }

    /// Current byte offset in the source.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Unconsumed input.
    #[inline]
    pub(crate) fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Consume characters while `pred` holds and return them as a slice.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        let len = self
            .rest()
            .char_indices()
            .find(|&(_, chr)| !pred(chr))
            .map_or(self.src.len() - start, |(offset, _)| offset);
        self.pos += len;
        &self.src[start..self.pos]
    }

    pub(crate) fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }
}
