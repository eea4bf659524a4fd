use std::io::{self, BufRead};

/// Line-oriented console reader.
pub struct ConsoleInput<R> {
    reader: R,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Next line without its line terminator, or `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// First whitespace-separated word of the next non-blank line.
    ///
    /// Usernames and passwords come through here, which keeps whitespace out of
    /// the account file.
    pub fn read_token(&mut self) -> io::Result<Option<String>> {
        while let Some(line) = self.read_line()? {
            let mut words = line.split_whitespace();
            let Some(token) = words.next() else {
                continue;
            };
            if words.next().is_some() {
                log::warn!("Ignoring input after `{token}`");
            }
            return Ok(Some(token.to_string()));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn lines_keep_inner_whitespace() {
        let mut input = ConsoleInput::new(Cursor::new("  hello there \r\nsecond\nlast"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("  hello there "));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(input.read_line().unwrap(), None);
    }

    #[test]
    fn tokens_skip_blank_lines_and_extra_words() {
        let mut input = ConsoleInput::new(Cursor::new("\n   \n alice smith\nbob\n"));
        assert_eq!(input.read_token().unwrap().as_deref(), Some("alice"));
        assert_eq!(input.read_token().unwrap().as_deref(), Some("bob"));
        assert_eq!(input.read_token().unwrap(), None);
    }

    #[test]
    fn empty_line_is_still_a_line() {
        let mut input = ConsoleInput::new(Cursor::new("\n"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some(""));
    }
}
