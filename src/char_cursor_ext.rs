use crate::cursor::Cursor;

pub trait CharCursorExt: Cursor<Item = char> {
    /// collect chars starting at `self` for as long as `pred` holds, returning them along with the
    /// first cursor that failed `pred` (or `None` at <eof>)
    fn take_while<P: Fn(char) -> bool>(&self, pred: P) -> (String, Option<Self>);

    /// collect the whitespace-delimited word starting at `self`
    fn word(&self) -> (String, Option<Self>) {
        self.take_while(|c| !c.is_whitespace())
    }
}

impl<C: Cursor<Item = char>> CharCursorExt for C {
    fn take_while<P: Fn(char) -> bool>(&self, pred: P) -> (String, Option<Self>) {
        let mut out = String::new();
        let mut head = Some(self.clone());

        while let Some(h) = head {
            let data = h.data();
            if !pred(data) {
                // stop on the first rejected char so the caller resumes there
                return (out, Some(h));
            }
            out.push(data);
            head = h.next();
        }

        (out, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::StrCursor;

    #[test]
    fn test_word_stops_at_whitespace() {
        let cursor = StrCursor::start("10+2 - 5").unwrap();
        let (word, next) = cursor.word();
        assert_eq!(word, "10+2");
        assert_eq!(next.map(|c| c.pos()), Some(4));
    }

    #[test]
    fn test_word_runs_to_eof() {
        let cursor = StrCursor::start("-17").unwrap();
        let (word, next) = cursor.word();
        assert_eq!(word, "-17");
        assert!(next.is_none());
    }

    #[test]
    fn test_take_while_rejects_first() {
        let cursor = StrCursor::start("x1").unwrap();
        let (taken, next) = cursor.take_while(|c| c.is_ascii_digit());
        assert!(taken.is_empty());
        assert_eq!(next, Some(cursor));
    }
}
