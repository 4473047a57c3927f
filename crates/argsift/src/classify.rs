//! Single-pass classification of raw arguments.
//!
//! Each token is picked off and determined to be one of:
//! - an option (`-o`, `--option`)
//! - a combination of short flags (`-opqr`, `-opqr=value`)
//! - an `option=value` pair (`--option=value`, `-o=value`)
//! - the value of the option immediately preceding it
//! - a positional argument
//!
//! There is no schema, so `--verbose file.txt` always reads as the option
//! `--verbose` with the value `file.txt`. Callers that know better have to
//! post-process the result.

use tracing::{debug, trace};

use crate::parsed::{OptionPair, Parsed};
use crate::tokens::Tokens;

/// Pending name left by a short combo ending in `-` (e.g. `-pqr-`).
///
/// A plain token following it is a positional, not a value.
const DASH_PENDING: &str = "--";

/// Classify `args` into positionals and option/value pairs.
///
/// Never fails. Classification stops at a literal `--`; the tokens after it
/// are returned unclassified in [`Parsed::rest`].
pub fn classify<S: AsRef<str>>(args: &[S]) -> Parsed {
    let mut tokens = Tokens::new(args);
    let mut state = State::default();

    for arg in tokens.by_ref() {
        state.feed(arg);
    }
    state.flush();

    let rest: Vec<String> = tokens
        .remaining()
        .iter()
        .map(|s| s.as_ref().to_string())
        .collect();

    debug!(
        positionals = state.positionals.len(),
        options = state.options.len(),
        rest = rest.len(),
        terminated = tokens.saw_terminator(),
        "classified arguments"
    );

    Parsed::from_parts(state.positionals, state.options, rest)
}

#[derive(Debug, Default)]
struct State {
    pending: Option<String>,
    positionals: Vec<String>,
    options: Vec<OptionPair>,
}

impl State {
    fn feed(&mut self, arg: &str) {
        if arg.is_empty() {
            trace!("skipping empty argument");
            return;
        }

        if let Some(after_dash) = arg.strip_prefix('-') {
            // A new option means the pending one got no value.
            self.flush();
            if after_dash.is_empty() {
                trace!("bare '-' ends the pending option");
                return;
            }
            if after_dash.starts_with('-') {
                self.long(arg);
            } else {
                self.short(arg);
            }
            return;
        }

        match self.pending.take() {
            Some(name) if name == DASH_PENDING => {
                trace!(arg, "argument after dash-terminated combo is positional");
                self.push_positional(arg);
            }
            Some(name) => self.push_option(name, arg.to_string()),
            None => self.push_positional(arg),
        }
    }

    /// `--option` or `--option=value`.
    fn long(&mut self, arg: &str) {
        match arg.split_once('=') {
            Some((name, value)) => self.push_option(name.to_string(), value.to_string()),
            None => self.hold(arg.to_string()),
        }
    }

    /// `-o`, `-o=value`, `-opqr`, `-opqr=value`.
    ///
    /// `-opqr=value` is treated like `-o -p -q -r=value`. An empty value after
    /// `=` leaves the last flag waiting for the next argument.
    fn short(&mut self, arg: &str) {
        let (flags, value) = match arg.find('=') {
            Some(idx) => (&arg[..idx], &arg[idx + 1..]),
            None => (arg, ""),
        };

        // `flags` always starts with '-'; with nothing after it (`-=value`)
        // the last flag is that dash.
        let mut chars = flags[1..].chars();
        let last = chars.next_back().unwrap_or('-');
        for c in chars {
            self.push_option(short_name(c), String::new());
        }

        let name = short_name(last);
        if value.is_empty() {
            self.hold(name);
        } else {
            self.push_option(name, value.to_string());
        }
    }

    fn hold(&mut self, name: String) {
        trace!(option = %name, "waiting for value");
        self.pending = Some(name);
    }

    /// Emit the pending option, if any, without a value.
    fn flush(&mut self) {
        if let Some(name) = self.pending.take() {
            self.push_option(name, String::new());
        }
    }

    fn push_option(&mut self, name: String, value: String) {
        trace!(option = %name, value = %value, "option");
        self.options.push(OptionPair { name, value });
    }

    fn push_positional(&mut self, arg: &str) {
        trace!(arg, "positional");
        self.positionals.push(arg.to_string());
    }
}

fn short_name(c: char) -> String {
    let mut name = String::with_capacity(1 + c.len_utf8());
    name.push('-');
    name.push(c);
    name
}
