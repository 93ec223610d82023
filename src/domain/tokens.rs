use std::str::SplitWhitespace;

/// Cursor over the whitespace-separated tokens of a single input line
///
/// Both the polygon reader and the command handlers pull their arguments
/// from this cursor, so nothing they do can reach past the end of the line.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            inner: line.split_whitespace(),
        }
    }

    /// Look at the next token without consuming it
    pub fn peek(&self) -> Option<&'a str> {
        self.inner.clone().next()
    }

    pub fn is_exhausted(&self) -> bool {
        self.peek().is_none()
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
