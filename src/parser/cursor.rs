//! Low-level text cursor for the color-list scanner.

/// A forward-only cursor over source text.
///
/// Token-level operations (`tag`, `int`, `take_name_chars`) skip horizontal
/// whitespace before matching; newlines are significant and only consumed
/// by the grammar's end-of-line rule.
#[derive(Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// True when only horizontal whitespace remains.
    pub fn at_end(&self) -> bool {
        self.rest().chars().all(is_hspace)
    }

    /// 1-based line number at the current position, for error reporting.
    pub fn line(&self) -> u32 {
        self.src[..self.pos].bytes().filter(|&b| b == b'\n').count() as u32 + 1
    }

    pub fn skip_hspace(&mut self) {
        while let Some(c) = self.rest().chars().next() {
            if !is_hspace(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Skip any run of whitespace including newlines.
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.rest().chars().next() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Match a literal token, consuming it on success.
    pub fn tag(&mut self, token: &str) -> bool {
        self.skip_hspace();
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    /// Consume a run of characters matching `pred`, without skipping
    /// whitespace first. Returns the (possibly empty) run.
    pub fn take_while<F>(&mut self, pred: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let start = self.pos;
        while let Some(c) = self.rest().chars().next() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.src[start..self.pos]
    }

    /// Scan a signed decimal integer.
    pub fn int(&mut self) -> Option<i64> {
        self.skip_hspace();
        let checkpoint = self.pos;

        let negative = if self.rest().starts_with('-') {
            self.pos += 1;
            true
        } else {
            if self.rest().starts_with('+') {
                self.pos += 1;
            }
            false
        };

        let digits = self.take_while(|c| c.is_ascii_digit());
        if digits.is_empty() {
            self.pos = checkpoint;
            return None;
        }

        match digits.parse::<i64>() {
            Ok(value) => Some(if negative { -value } else { value }),
            Err(_) => {
                self.pos = checkpoint;
                None
            }
        }
    }
}

fn is_hspace(c: char) -> bool {
    c == ' ' || c == '\t'
}
