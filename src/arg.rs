use std::fmt::Display;

pub(crate) mod symbol {
    // @note: normalizing depends on the long prefix starting with the short prefix
    pub const SWITCH: &str = "-";
    pub const FLAG: &str = "--";
    pub const ASSIGN: char = '=';
}

/// A single option token split into its normalized key and raw value.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Arg {
    key: String,
    value: String,
}

impl Arg {
    /// Splits the raw `token` into an [Arg].
    ///
    /// The token is divided at the first `=` (the value is empty if there is
    /// none) and a leading `--` is reduced to `-`, so `--foo=1` and `-foo=1`
    /// produce the same key. Returns `None` when the token is not an option,
    /// meaning its key does not begin with `-`.
    pub fn tokenize<T: AsRef<str>>(token: T) -> Option<Self> {
        let token = token.as_ref();
        let (key, value) = match token.split_once(symbol::ASSIGN) {
            Some((k, v)) => (k, v),
            None => (token, ""),
        };
        // drop exactly one dash from the long form
        let key = match key.starts_with(symbol::FLAG) {
            true => &key[symbol::SWITCH.len()..],
            false => key,
        };
        if key.starts_with(symbol::SWITCH) == false {
            return None;
        }
        Some(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    pub fn get_key(&self) -> &str {
        self.key.as_ref()
    }

    pub fn get_value(&self) -> &str {
        self.value.as_ref()
    }

    /// Consumes the [Arg] into its `(key, value)` pair.
    pub fn into_pair(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl Display for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self.value.is_empty() {
            true => write!(f, "{}", self.key),
            false => write!(f, "{}{}{}", self.key, symbol::ASSIGN, self.value),
        }
    }
}
