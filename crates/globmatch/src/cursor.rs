/// A traversal position over a sequence of units together with its end.
///
/// Wraps any cloneable iterator. Cloning the cursor saves the position,
/// which is what backtracking over `*` relies on.
#[derive(Debug, Clone)]
pub struct Cursor<I: Iterator> {
    head: Option<I::Item>,
    tail: I,
}

impl<I> Cursor<I>
where
    I: Iterator + Clone,
    I::Item: Copy,
{
    #[inline]
    pub fn new(mut tail: I) -> Self {
        let head = tail.next();
        Self { head, tail }
    }

    /// Returns the unit at the current position or `None` at the end.
    #[inline(always)]
    pub fn peek(&self) -> Option<I::Item> {
        self.head
    }

    #[inline(always)]
    pub fn at_end(&self) -> bool {
        self.head.is_none()
    }

    /// Moves one unit forward. Does nothing at the end.
    #[inline(always)]
    pub fn advance(&mut self) {
        if self.head.is_some() {
            self.head = self.tail.next();
        }
    }

    /// Returns a copy of the cursor moved one unit forward.
    #[inline(always)]
    pub fn advanced(&self) -> Self {
        let mut next = self.clone();
        next.advance();
        next
    }
}

impl<I> From<I> for Cursor<I>
where
    I: Iterator + Clone,
    I::Item: Copy,
{
    #[inline]
    fn from(iter: I) -> Self {
        Self::new(iter)
    }
}
