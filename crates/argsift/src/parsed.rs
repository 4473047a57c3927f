//! Classification results and lookup helpers.

use indexmap::IndexMap;

/// One option occurrence: `--name value`, `--name=value`, `-n value` or a bare `-n`.
///
/// `value` is empty when the option carried no value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPair {
    pub name: String,
    pub value: String,
}

impl OptionPair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Whether the option was given without a value.
    pub fn is_bare(&self) -> bool {
        self.value.is_empty()
    }

    pub fn as_tuple(&self) -> (&str, &str) {
        (self.name.as_str(), self.value.as_str())
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for OptionPair {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

/// One or more spellings of an option, used by the lookup helpers.
///
/// Implemented for single names (`"-o"`, `String`) and for lists of them
/// (arrays, slices, `Vec`), so `get(["-o", "--output"])` matches either one.
pub trait OptionNames {
    fn matches(&self, name: &str) -> bool;
}

impl OptionNames for str {
    fn matches(&self, name: &str) -> bool {
        self == name
    }
}

impl OptionNames for String {
    fn matches(&self, name: &str) -> bool {
        self.as_str() == name
    }
}

impl<S: AsRef<str>> OptionNames for [S] {
    fn matches(&self, name: &str) -> bool {
        self.iter().any(|s| s.as_ref() == name)
    }
}

impl<S: AsRef<str>, const N: usize> OptionNames for [S; N] {
    fn matches(&self, name: &str) -> bool {
        self.as_slice().matches(name)
    }
}

impl<S: AsRef<str>> OptionNames for Vec<S> {
    fn matches(&self, name: &str) -> bool {
        self.as_slice().matches(name)
    }
}

impl<T: OptionNames + ?Sized> OptionNames for &T {
    fn matches(&self, name: &str) -> bool {
        (**self).matches(name)
    }
}

/// Output of one classification pass.
///
/// Positionals and options each keep the order in which they were
/// determined. Tokens after a literal `--` are not classified and are kept
/// verbatim in [`Parsed::rest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parsed {
    positionals: Vec<String>,
    options: Vec<OptionPair>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    rest: Vec<String>,
}

impl Parsed {
    pub(crate) fn from_parts(
        positionals: Vec<String>,
        options: Vec<OptionPair>,
        rest: Vec<String>,
    ) -> Self {
        Self {
            positionals,
            options,
            rest,
        }
    }

    pub fn positionals(&self) -> &[String] {
        self.positionals.as_slice()
    }

    pub fn options(&self) -> &[OptionPair] {
        self.options.as_slice()
    }

    /// Tokens that followed a literal `--`, untouched.
    pub fn rest(&self) -> &[String] {
        self.rest.as_slice()
    }

    /// Get a positional argument by index.
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(|s| s.as_str())
    }

    /// Get the value of the last occurrence of an option.
    ///
    /// Bare options yield `Some("")`.
    pub fn get<N: OptionNames>(&self, names: N) -> Option<&str> {
        self.options
            .iter()
            .rev()
            .find(|pair| names.matches(&pair.name))
            .map(|pair| pair.value.as_str())
    }

    /// Get the values of every occurrence of an option, in input order.
    pub fn get_all<N: OptionNames>(&self, names: N) -> Vec<&str> {
        self.options
            .iter()
            .filter(|pair| names.matches(&pair.name))
            .map(|pair| pair.value.as_str())
            .collect()
    }

    /// Whether an option occurred at all, with or without a value.
    pub fn is_present<N: OptionNames>(&self, names: N) -> bool {
        self.options.iter().any(|pair| names.matches(&pair.name))
    }

    /// Option values grouped by name; names appear in first-seen order.
    pub fn grouped(&self) -> IndexMap<&str, Vec<&str>> {
        let mut out: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for pair in &self.options {
            out.entry(pair.name.as_str())
                .or_default()
                .push(pair.value.as_str());
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.positionals.is_empty() && self.options.is_empty() && self.rest.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<OptionPair>, Vec<String>) {
        (self.positionals, self.options, self.rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Parsed {
        Parsed::from_parts(
            vec!["in.txt".to_string(), "out.txt".to_string()],
            vec![
                OptionPair::new("-v", ""),
                OptionPair::new("--level", "2"),
                OptionPair::new("-l", "5"),
                OptionPair::new("--level", "3"),
            ],
            vec![],
        )
    }

    #[test]
    fn get_returns_last_value_across_spellings() {
        let parsed = sample();
        assert_eq!(parsed.get("--level"), Some("3"));
        assert_eq!(parsed.get(["-l"]), Some("5"));
        assert_eq!(parsed.get(["-l", "--level"]), Some("3"));
        assert_eq!(parsed.get("-v"), Some(""));
        assert_eq!(parsed.get("--missing"), None);
    }

    #[test]
    fn get_all_keeps_input_order() {
        let parsed = sample();
        let names: &[&str] = &["--level", "-l"];
        assert_eq!(parsed.get_all(names), vec!["2", "5", "3"]);
        assert!(parsed.get_all("--missing").is_empty());
    }

    #[test]
    fn presence_ignores_values() {
        let parsed = sample();
        assert!(parsed.is_present("-v"));
        assert!(parsed.is_present(["-q", "--level"]));
        assert!(!parsed.is_present("-q"));
    }

    #[test]
    fn grouped_uses_first_seen_order() {
        let parsed = sample();
        let grouped = parsed.grouped();
        let keys: Vec<&str> = grouped.keys().copied().collect();
        assert_eq!(keys, vec!["-v", "--level", "-l"]);
        assert_eq!(grouped["--level"], vec!["2", "3"]);
        assert_eq!(grouped["-v"], vec![""]);
    }

    #[test]
    fn owned_name_lists_match() {
        let parsed = sample();
        let spellings = vec!["-l".to_string(), "--level".to_string()];
        assert_eq!(parsed.get(&spellings), Some("3"));
        assert_eq!(parsed.get_all(spellings).len(), 3);
        assert!(parsed.is_present(String::from("-v")));
        assert!(!parsed.is_present(Vec::<String>::new()));
    }

    #[test]
    fn positional_by_index() {
        let parsed = sample();
        assert_eq!(parsed.positional(0), Some("in.txt"));
        assert_eq!(parsed.positional(1), Some("out.txt"));
        assert_eq!(parsed.positional(2), None);
    }

    #[test]
    fn pair_helpers() {
        let pair: OptionPair = ("-o", "file").into();
        assert_eq!(pair.as_tuple(), ("-o", "file"));
        assert!(!pair.is_bare());
        assert!(OptionPair::new("--flag", "").is_bare());
    }

    #[test]
    fn default_is_empty() {
        assert!(Parsed::default().is_empty());
        assert!(!sample().is_empty());
    }
}
