use anyhow::{anyhow, bail, Result};

use crate::model::FormFields;

/// Words split into `key:value` pairs and everything else.
#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub words: Vec<String>,
    pub pairs: Vec<(String, String)>,
}

pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut words = Vec::new();
    let mut pairs = Vec::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                pairs.push((key.to_lowercase(), value.to_string()));
                continue;
            }
        }
        words.push(arg.clone());
    }

    ParsedInput { words, pairs }
}

/// Resolves an abbreviated key against `candidates` by exact or unique
/// prefix match.
pub fn expand_key<'a>(key: &str, candidates: &[&'a str]) -> Result<&'a str> {
    if let Some(exact) = candidates.iter().find(|c| **c == key) {
        return Ok(*exact);
    }

    let matches: Vec<&'a str> = candidates
        .iter()
        .filter(|c| c.starts_with(key))
        .copied()
        .collect();

    match matches.len() {
        1 => Ok(matches[0]),
        0 => Err(anyhow!("Unknown key: '{}' (expected one of {:?})", key, candidates)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// Builds a form value from `key:value` arguments. Bare words are joined
/// into the first field when it was not given as a pair, so
/// `add Bench press kg:60 ...` works.
pub fn parse_form<T: FormFields>(args: &[String]) -> Result<T> {
    let parsed = parse_args(args);
    let mut form = T::default();

    if !parsed.words.is_empty() {
        let first = T::KEYS[0];
        form.set_field(first, parsed.words.join(" "));
    }

    for (key, value) in parsed.pairs {
        let full_key = expand_key(&key, T::KEYS)?;
        if !form.set_field(full_key, value) {
            bail!("Field '{}' cannot be set on {}", full_key, T::CATEGORY);
        }
    }

    Ok(form)
}

/// Copies every non-empty field of `changes` onto `base`; the rest of `base`
/// is kept.
pub fn overlay_form<T: FormFields>(base: &mut T, changes: &T) {
    for i in 0..T::field_count() {
        let Some(value) = changes.field(i).filter(|v| !v.is_empty()) else {
            continue;
        };
        if let Some(slot) = base.field_mut(i) {
            *slot = value.to_string();
        }
    }
}
