use crate::classify::classify;
use crate::parsed::Parsed;

/// An owned list of command-line arguments, ready to be classified.
///
/// `Argv::default()` is the empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argv {
    args: Vec<String>,
}

impl Argv {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Arguments of the current process, without the program name.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn from_env() -> Self {
        Self::new(
            std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    pub fn args(&self) -> &[String] {
        self.args.as_slice()
    }

    /// Classify the arguments.
    ///
    /// Can be chained with construction (`Argv::new(args).parse()`) and
    /// called again for an identical result.
    pub fn parse(&self) -> Parsed {
        classify(&self.args)
    }
}

impl<S: Into<String>> FromIterator<S> for Argv {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<String>> for Argv {
    fn from(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl From<Option<Vec<String>>> for Argv {
    fn from(args: Option<Vec<String>>) -> Self {
        args.map(Self::from).unwrap_or_default()
    }
}
