use std::ffi::OsString;

pub(crate) mod exit_code {
    pub const BAD: u8 = 101;
    pub const OKAY: u8 = 0;
}

type SomeError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised at the edges of parameter handling.
///
/// Parsing and querying never fail; these come from reading the process
/// arguments or from rules the application applies to the parsed values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("argument {0:?} is not valid unicode")]
    NonUnicodeArg(OsString),
    #[error("{0}")]
    CustomRule(SomeError),
}

impl Error {
    /// Creates a custom rule error from a message.
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        let msg: String = msg.into();
        Self::CustomRule(msg.into())
    }

    /// Returns the process exit code for the error.
    pub fn code(&self) -> u8 {
        exit_code::BAD
    }

    /// Transforms any error into a custom rule error to be used while
    /// interpreting a [crate::Cli].
    pub fn validate<U, E>(rule: Result<U, E>) -> Result<U, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        rule.map_err(|e| Self::CustomRule(Box::new(e)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn custom_rule_disp() {
        let err = Error::custom("missing required parameter \"-datadir\"");
        assert_eq!(err.to_string(), "missing required parameter \"-datadir\"");
        assert_eq!(err.code(), 101);
    }

    #[test]
    fn validate_wraps_errors() {
        let ok: Result<u8, Error> = Error::validate("12".parse::<u8>());
        assert_eq!(ok.unwrap(), 12);

        let bad = Error::validate("300".parse::<u8>()).unwrap_err();
        assert!(matches!(bad, Error::CustomRule(_)));
        assert_eq!(bad.to_string(), "number too large to fit in target type");
    }

    #[test]
    fn non_unicode_disp() {
        let err = Error::NonUnicodeArg(OsString::from("-snc"));
        assert_eq!(err.to_string(), "argument \"-snc\" is not valid unicode");
    }
}
