//! Cursor over a borrowed argument list.

/// Literal token that ends classification.
pub const TERMINATOR: &str = "--";

/// Walks an argument slice left to right without mutating it.
///
/// `next()` yields `None` both when the slice is exhausted and when the
/// terminator (`--`) is reached. The two cases are told apart with
/// [`Tokens::saw_terminator`]; after the terminator, [`Tokens::remaining`]
/// holds the tokens that follow it.
#[derive(Debug, Clone)]
pub struct Tokens<'a, S> {
    args: &'a [S],
    pos: usize,
    terminated: bool,
}

impl<'a, S: AsRef<str>> Tokens<'a, S> {
    pub fn new(args: &'a [S]) -> Self {
        Self {
            args,
            pos: 0,
            terminated: false,
        }
    }

    /// Whether the cursor stopped on a literal `--`.
    pub fn saw_terminator(&self) -> bool {
        self.terminated
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> &'a [S] {
        &self.args[self.pos..]
    }

    /// Index of the next token to be consumed.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a, S: AsRef<str>> Iterator for Tokens<'a, S> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.terminated {
            return None;
        }
        let arg = self.args.get(self.pos)?.as_ref();
        self.pos += 1;
        if arg == TERMINATOR {
            self.terminated = true;
            return None;
        }
        Some(arg)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.terminated {
            (0, Some(0))
        } else {
            (0, Some(self.args.len() - self.pos))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_all_tokens_then_none() {
        let argv = ["a", "-b", ""];
        let mut tokens = Tokens::new(&argv);
        assert_eq!(tokens.next(), Some("a"));
        assert_eq!(tokens.next(), Some("-b"));
        assert_eq!(tokens.next(), Some(""));
        assert_eq!(tokens.next(), None);
        assert!(!tokens.saw_terminator());
        assert!(tokens.remaining().is_empty());
    }

    #[test]
    fn stops_at_terminator_and_keeps_tail() {
        let argv = vec!["a".to_string(), "--".to_string(), "-x".to_string(), "--".to_string()];
        let mut tokens = Tokens::new(&argv);
        assert_eq!(tokens.next(), Some("a"));
        assert_eq!(tokens.next(), None);
        assert!(tokens.saw_terminator());
        assert_eq!(tokens.remaining(), &["-x".to_string(), "--".to_string()]);

        // Stays stopped.
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.position(), 2);
    }

    #[test]
    fn longer_dash_runs_are_not_terminators() {
        let argv = ["---", "-"];
        let tokens: Vec<&str> = Tokens::new(&argv).collect();
        assert_eq!(tokens, vec!["---", "-"]);
    }

    #[test]
    fn does_not_touch_input() {
        let argv = vec!["x".to_string(), "y".to_string()];
        let _ = Tokens::new(&argv).count();
        assert_eq!(argv, vec!["x".to_string(), "y".to_string()]);
    }
}
