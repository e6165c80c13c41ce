//! Character cursor for traversing scanner input.
//!
//! The cursor owns the whole input as a `Vec<char>` and keeps a single
//! index into it. Reading, pushing back and rewinding are all O(1) index
//! moves, so the scanner can backtrack without any stream-unread support.

/// A random-access cursor over a fully materialized character buffer.
///
/// # Example
///
/// ```
/// use vala_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("=>");
/// assert_eq!(cursor.bump(), Some('='));
/// cursor.unbump();
/// assert_eq!(cursor.first(), Some('='));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    /// The input being traversed.
    chars: Vec<char>,

    /// Index of the next character to read.
    position: usize,
}

impl Cursor {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
        }
    }

    /// Reads the next character and advances past it.
    ///
    /// Returns `None` at the end of the input without moving.
    ///
    /// # Example
    ///
    /// ```
    /// use vala_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert_eq!(cursor.bump(), Some('a'));
    /// assert_eq!(cursor.bump(), None);
    /// assert_eq!(cursor.bump(), None);
    /// ```
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.chars.get(self.position).copied()?;
        self.position += 1;
        Some(ch)
    }

    /// Pushes the most recently read character back.
    ///
    /// Only valid directly after a `bump` that returned `Some`. The cursor
    /// never moves before the start of the buffer.
    #[inline]
    pub fn unbump(&mut self) {
        debug_assert!(self.position > 0, "unbump at start of input");
        self.position = self.position.saturating_sub(1);
    }

    /// Returns the next character without consuming it.
    #[inline]
    pub fn first(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Consumes characters while `predicate` holds.
    ///
    /// # Example
    ///
    /// ```
    /// use vala_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abc1+");
    /// cursor.eat_while(|c| c.is_ascii_alphanumeric());
    /// assert_eq!(cursor.first(), Some('+'));
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(ch) = self.bump() {
            if !predicate(ch) {
                self.unbump();
                break;
            }
        }
    }

    /// Returns true if every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Returns the index of the next character to read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the text between `start` and the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use vala_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("var x");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c != ' ');
    /// assert_eq!(cursor.slice_from(start), "var");
    /// ```
    pub fn slice_from(&self, start: usize) -> String {
        self.chars[start..self.position].iter().collect()
    }

    /// Creates a snapshot of the current position.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
        }
    }

    /// Restores a previously saved snapshot.
    ///
    /// Snapshots are only ever taken behind the cursor, so restoring moves
    /// backward (or nowhere) and stays within the buffer.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        debug_assert!(snapshot.position <= self.chars.len());
        self.position = snapshot.position;
    }
}

/// A saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Character index in the buffer.
    pub position: usize,
}
