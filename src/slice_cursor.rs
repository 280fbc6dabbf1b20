pub(crate) struct SliceCursor<'a, T> {
    slice: &'a [T],
    // Index of the next element to be returned. slice.len() means the end.
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn at_start(slice: &'a [T]) -> Self {
        SliceCursor { slice, pos: 0 }
    }

    pub fn peek_next(&self) -> Option<&'a T> {
        self.slice.get(self.pos)
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos == self.slice.len()
    }
}

impl<'a, T> Iterator for SliceCursor<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.slice.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slice.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<'a> SliceCursor<'a, u8> {
    /// Consumes `byte` if it is the next element.
    pub fn eat(&mut self, byte: u8) -> bool {
        self.eat_if(|b| b == byte).is_some()
    }

    /// Consumes and returns the next byte if it satisfies `predicate`.
    pub fn eat_if(&mut self, predicate: impl FnOnce(u8) -> bool) -> Option<u8> {
        match self.peek_next() {
            Some(&b) if predicate(b) => {
                self.pos += 1;
                Some(b)
            }
            _ => None,
        }
    }

    /// Consumes up to `max` ascii digits and returns them.
    pub fn digits(&mut self, max: usize) -> &'a [u8] {
        let start = self.pos;
        let end = self.slice[start..]
            .iter()
            .take(max)
            .take_while(|b| b.is_ascii_digit())
            .count();
        self.pos += end;
        &self.slice[start..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_navigation() {
        let slice = &[1, 2, 3];
        let mut cursor = SliceCursor::at_start(slice);
        assert_eq!(cursor.peek_next(), Some(&1));
        assert_eq!(cursor.next(), Some(&1));
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.size_hint(), (2, Some(2)));
        assert_eq!(cursor.next(), Some(&2));
        assert_eq!(cursor.next(), Some(&3));
        assert!(cursor.at_end());
        assert_eq!(cursor.peek_next(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.pos(), 3);
    }

    #[test]
    fn empty_slice() {
        let slice: &[i32] = &[];
        let mut cursor = SliceCursor::at_start(slice);
        assert!(cursor.at_end());
        assert_eq!(cursor.peek_next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn byte_helpers() {
        let mut cursor = SliceCursor::at_start(b"2024-1x");
        assert_eq!(cursor.digits(3), b"202");
        assert_eq!(cursor.digits(9), b"4");
        assert!(!cursor.eat(b':'));
        assert!(cursor.eat(b'-'));
        assert_eq!(cursor.digits(2), b"1");
        assert_eq!(cursor.digits(2), b"");
        assert_eq!(cursor.eat_if(|b| b == b'x'), Some(b'x'));
        assert!(cursor.at_end());
    }
}
