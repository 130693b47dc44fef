use crate::arg::Arg;
use crate::error::Error;
use crate::negate;
use crate::value;
use std::collections::HashMap;
use std::ffi::OsString;
use std::marker::PhantomData;

pub type Result<T> = std::result::Result<T, Error>;

pub mod states {
    /// The [Cli][super::Cli] is accepting tokens.
    #[derive(Debug, PartialEq)]
    pub struct Build;

    /// Negations have been resolved and the [Cli][super::Cli] can be queried.
    #[derive(Debug, PartialEq)]
    pub struct Ready;
}

use states::{Build, Ready};

/// The parameter store built from the command-line.
///
/// `args` holds the first value given for each key and `multi_args` holds
/// every value given for each key in the order they appeared.
#[derive(Debug, PartialEq)]
pub struct Cli<S> {
    args: HashMap<String, String>,
    multi_args: HashMap<String, Vec<String>>,
    _state: PhantomData<S>,
}

impl Default for Cli<Build> {
    fn default() -> Self {
        Self::new()
    }
}

impl Cli<Build> {
    /// Creates an empty [Cli] ready to receive tokens.
    pub fn new() -> Self {
        Cli {
            args: HashMap::new(),
            multi_args: HashMap::new(),
            _state: PhantomData,
        }
    }

    /// Ingests the option tokens from `tokens`.
    ///
    /// The program name must already be removed. Tokens that are not
    /// options are skipped. The first value for a key is kept for single
    /// lookups while every value is kept for [get_args][Cli::get_args].
    pub fn parse<T, U>(mut self, tokens: T) -> Self
    where
        T: IntoIterator<Item = U>,
        U: AsRef<str>,
    {
        for token in tokens {
            let token = token.as_ref();
            let (key, val) = match Arg::tokenize(token) {
                Some(arg) => arg.into_pair(),
                None => {
                    log::trace!("skipping non-option token {:?}", token);
                    continue;
                }
            };
            log::trace!("ingested {:?} as {}={:?}", token, key, val);
            self.multi_args
                .entry(key.clone())
                .or_insert(Vec::new())
                .push(val.clone());
            self.args.entry(key).or_insert(val);
        }
        self
    }

    /// Finalizes the [Cli] by resolving every `-noX` key into `-X`.
    pub fn save(mut self) -> Cli<Ready> {
        let written = negate::resolve(&mut self.args, &self.multi_args);
        log::debug!(
            "saved {} parameters ({} implied by negation)",
            self.args.len(),
            written
        );
        Cli {
            args: self.args,
            multi_args: self.multi_args,
            _state: PhantomData,
        }
    }
}

impl Cli<Ready> {
    /// Parses `tokens` (without the program name) into a finalized [Cli].
    pub fn from_args<T, U>(tokens: T) -> Self
    where
        T: IntoIterator<Item = U>,
        U: AsRef<str>,
    {
        Cli::new().parse(tokens).save()
    }

    /// Parses the current process's arguments into a finalized [Cli].
    ///
    /// Errors if an option is not valid unicode.
    pub fn from_env() -> Result<Self> {
        Self::from_os_args(std::env::args_os())
    }

    /// Parses a full argument vector, including the program name in the
    /// first position, into a finalized [Cli].
    ///
    /// Non-unicode tokens that are not options are skipped like any other
    /// positional. Errors if an option is not valid unicode.
    pub fn from_os_args<T: IntoIterator<Item = OsString>>(args: T) -> Result<Self> {
        let mut tokens = Vec::new();
        for arg in args.into_iter().skip(1) {
            match arg.into_string() {
                Ok(s) => tokens.push(s),
                Err(os) => {
                    let is_option = Arg::tokenize(os.to_string_lossy()).is_some();
                    if is_option == true {
                        return Err(Error::NonUnicodeArg(os));
                    }
                    log::trace!("skipping non-unicode token {:?}", os);
                }
            }
        }
        Ok(Self::from_args(tokens))
    }

    /// Discards every parameter to begin a new parse.
    pub fn reset(self) -> Cli<Build> {
        Cli::new()
    }

    /// Runs the negation pass again over the stored parameters.
    ///
    /// Returns the number of keys written, which is zero for any [Cli] that
    /// was already saved.
    pub fn resolve_negations(&mut self) -> usize {
        negate::resolve(&mut self.args, &self.multi_args)
    }

    /// Checks if `key` was given (or implied by a negation).
    pub fn is_arg_set(&self, key: &str) -> bool {
        self.args.contains_key(key)
    }

    /// References the first value given for `key`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.args.get(key).map(|s| s.as_str())
    }

    /// Returns the first value given for `key`, or `default` if it is absent.
    pub fn get_arg<T: AsRef<str>>(&self, key: &str, default: T) -> String {
        match self.get_str(key) {
            Some(s) => s.to_string(),
            None => default.as_ref().to_string(),
        }
    }

    /// Returns the integer value of `key`, or `default` if it is absent.
    ///
    /// A value present without leading digits is `0`, not `default`.
    pub fn get_int_arg(&self, key: &str, default: i64) -> i64 {
        match self.get_str(key) {
            Some(s) => value::to_int(s),
            None => default,
        }
    }

    /// Returns the boolean value of `key`, or `default` if it is absent.
    ///
    /// A bare switch is `true` and only a value of `0` is `false`.
    pub fn get_bool_arg(&self, key: &str, default: bool) -> bool {
        match self.get_str(key) {
            Some(s) => value::to_bool(s),
            None => default,
        }
    }

    /// References every value given for `key` in command-line order.
    ///
    /// Keys implied only through a negation have no values here.
    pub fn get_args(&self, key: &str) -> &[String] {
        self.multi_args
            .get(key)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Iterates over every key that can be queried.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.args.keys().map(|k| k.as_str())
    }

    /// Sets `key` to `val` only if it was not already given.
    ///
    /// The key is normalized like a command-line key (`--foo` is `-foo`).
    /// Keys that are not options, carry an `=`, or are negations (`-nofoo`)
    /// are refused since soft values never pass through the negation pass.
    /// Soft values are not recorded for [get_args][Cli::get_args].
    ///
    /// Returns `true` if the value was set.
    pub fn soft_set_arg<T: AsRef<str>>(&mut self, key: &str, val: T) -> bool {
        if key.contains(crate::arg::symbol::ASSIGN) == true {
            return false;
        }
        let key = match Arg::tokenize(key) {
            Some(arg) => arg.into_pair().0,
            None => return false,
        };
        if negate::target(&key).is_some() == true || self.args.contains_key(&key) == true {
            return false;
        }
        log::debug!("soft set {}={:?}", key, val.as_ref());
        self.args.insert(key, val.as_ref().to_string());
        true
    }

    /// Sets `key` to the boolean `val` only if it was not already given.
    ///
    /// Returns `true` if the value was set.
    pub fn soft_set_bool_arg(&mut self, key: &str, val: bool) -> bool {
        self.soft_set_arg(key, value::from_bool(val))
    }
}
