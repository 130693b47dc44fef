use crate::arg::symbol;
use crate::value;
use std::collections::HashMap;

const PREFIX: &str = "-no";

/// Returns the key that the negation key `key` switches off.
///
/// `-nofoo` targets `-foo`. A key that is only the prefix (`-no`) or does not
/// start with it has no target.
pub fn target(key: &str) -> Option<String> {
    match key.strip_prefix(PREFIX) {
        Some(rest) if rest.is_empty() == false => Some(format!("{}{}", symbol::SWITCH, rest)),
        _ => None,
    }
}

/// Backfills the targets of every tokenized negation key into `args`.
///
/// Only keys in `multi_args` (the keys read from the command-line) are
/// considered, so a target written by this pass never acts as a negation key
/// itself. A target already in `args` is left alone no matter where it was
/// given relative to its negation. Otherwise the target receives the inverse
/// of the negation's boolean value.
///
/// Returns the number of targets written; a second pass over the same maps
/// always returns zero.
pub fn resolve(
    args: &mut HashMap<String, String>,
    multi_args: &HashMap<String, Vec<String>>,
) -> usize {
    let mut negations: Vec<(&String, String)> = multi_args
        .keys()
        .filter_map(|k| Some((k, target(k)?)))
        .collect();
    // keep the log output stable across runs
    negations.sort();

    let mut written = 0;
    for (key, target) in negations {
        if args.contains_key(&target) == true {
            continue;
        }
        let negated = match args.get(key) {
            Some(v) => value::to_bool(v),
            None => continue,
        };
        let v = value::from_bool(negated == false);
        log::debug!("negation {} sets {}={}", key, target, v);
        args.insert(target, v.to_string());
        written += 1;
    }
    written
}
