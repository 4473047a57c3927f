//! Schema-less command-line argument classification.
//!
//! Most argument parsers need a declaration of the expected flags before they
//! can parse anything. This crate doesn't: it walks the argument list once and
//! sorts every token into a positional argument or an option/value pair.
//!
//! ```
//! use argsift::Argv;
//!
//! let parsed = Argv::new(["-vo", "out.txt", "input.txt", "--level=3"]).parse();
//! assert_eq!(parsed.positionals(), &["input.txt".to_string()]);
//! assert_eq!(parsed.get("-v"), Some(""));
//! assert_eq!(parsed.get(["-o", "--output"]), Some("out.txt"));
//! assert_eq!(parsed.get("--level"), Some("3"));
//! ```
//!
//! Without a schema there is no way to tell a boolean flag from a
//! value-taking option: `--verbose file.txt` is read as `--verbose` with the
//! value `file.txt`. This is good enough for quickly handling a small,
//! simple argument list.

mod argv;
mod classify;
mod parsed;
pub mod tokens;

pub use argv::Argv;
pub use classify::classify;
pub use parsed::{OptionNames, OptionPair, Parsed};
