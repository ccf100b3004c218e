use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use mgen_core::{ErrorInfo, GroupElement, MgenError, RngHandle};
use serde::{Deserialize, Serialize};

/// Options for [`random_word_search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOpts {
    /// Master seed of the search.
    pub seed: u64,
    /// Longest word tried, counted in generator letters.
    #[serde(default = "SearchOpts::default_max_length")]
    pub max_length: usize,
    /// Number of random words tried before giving up.
    #[serde(default = "SearchOpts::default_attempts")]
    pub attempts: usize,
    /// Elements whose order exceeds this are skipped.
    #[serde(default = "SearchOpts::default_order_limit")]
    pub order_limit: u64,
}

impl SearchOpts {
    const fn default_max_length() -> usize {
        12
    }

    const fn default_attempts() -> usize {
        10_000
    }

    const fn default_order_limit() -> u64 {
        1_000
    }
}

impl Default for SearchOpts {
    fn default() -> Self {
        Self {
            seed: 0,
            max_length: Self::default_max_length(),
            attempts: Self::default_attempts(),
            order_limit: Self::default_order_limit(),
        }
    }
}

/// Word found for one requested order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Order of the element.
    pub order: u64,
    /// Expression in the generator names, e.g. `a*b*a*b^2`.
    pub expression: String,
    /// Attempt on which the word was found.
    pub attempt: usize,
}

/// Outcome of a random word search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Seed the search ran with.
    pub seed: u64,
    /// Attempts actually made.
    pub attempts: usize,
    /// First hit per requested order.
    pub hits: BTreeMap<u64, SearchHit>,
    /// Requested orders with no hit.
    pub missing: Vec<u64>,
}

fn render(names: &[&str], letters: &[usize]) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut i = 0;
    while i < letters.len() {
        let mut run = 1;
        while i + run < letters.len() && letters[i + run] == letters[i] {
            run += 1;
        }
        let name = names[letters[i]];
        parts.push(if run == 1 {
            name.to_string()
        } else {
            format!("{name}^{run}")
        });
        i += run;
    }
    parts.join("*")
}

/// Multiplies random words in `generators` until an element of every order
/// in `targets` has been seen or the attempts run out.
///
/// Each generator carries the name used in the returned expressions, so a hit
/// can be pasted into a certificate. Repeated targets count once, and
/// `missing` is ascending. The search is a function of the seed.
pub fn random_word_search<E: GroupElement>(
    generators: &[(String, E)],
    targets: &[u64],
    opts: &SearchOpts,
) -> Result<SearchReport, MgenError> {
    if generators.is_empty() {
        return Err(MgenError::Closure(ErrorInfo::new(
            "empty-generators",
            "word search requires at least one generator",
        )));
    }
    if opts.max_length == 0 {
        return Err(MgenError::Rng(
            ErrorInfo::new("invalid-length", "max_length must be positive")
                .with_context("max_length", "0"),
        ));
    }

    let targets: BTreeSet<u64> = targets.iter().copied().collect();
    let names: Vec<&str> = generators.iter().map(|(name, _)| name.as_str()).collect();
    let mut rng = RngHandle::from_seed(opts.seed);
    let mut hits = BTreeMap::new();
    let mut attempts = 0;
    while attempts < opts.attempts && hits.len() < targets.len() {
        attempts += 1;
        let length = 1 + rng.index(opts.max_length);
        let letters: Vec<usize> = (0..length).map(|_| rng.index(generators.len())).collect();
        let mut element = generators[letters[0]].1.clone();
        for &letter in &letters[1..] {
            element = element.mul(&generators[letter].1);
        }
        let Some(order) = element.order_bounded(opts.order_limit) else {
            continue;
        };
        if targets.contains(&order) && !hits.contains_key(&order) {
            let expression = render(&names, &letters);
            debug!("order {order} found after {attempts} attempts: {expression}");
            hits.insert(
                order,
                SearchHit {
                    order,
                    expression,
                    attempt: attempts,
                },
            );
        }
    }

    let missing = targets
        .iter()
        .copied()
        .filter(|order| !hits.contains_key(order))
        .collect();
    Ok(SearchReport {
        seed: opts.seed,
        attempts,
        hits,
        missing,
    })
}
