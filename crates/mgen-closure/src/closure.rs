use std::collections::{BTreeMap, HashMap, HashSet};

use log::debug;
use mgen_core::{ErrorInfo, GroupElement, MgenError};
use serde::{Deserialize, Serialize};

/// Options controlling a closure enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureOpts {
    /// Abort with `closure-limit` once more elements than this are found.
    #[serde(default)]
    pub max_elements: Option<usize>,
    /// Emit a debug log line every this many new elements; zero disables it.
    #[serde(default = "default_progress_every")]
    pub progress_every: usize,
}

fn default_progress_every() -> usize {
    100_000
}

impl Default for ClosureOpts {
    fn default() -> Self {
        Self {
            max_elements: None,
            progress_every: default_progress_every(),
        }
    }
}

/// Elements of a finitely generated subgroup in discovery order.
#[derive(Debug, Clone)]
pub struct Closure<E: GroupElement> {
    elements: Vec<E>,
    index: HashMap<E::Key, usize>,
}

impl<E: GroupElement> Closure<E> {
    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false for a closure built from at least one generator.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether `element` was reached.
    pub fn contains(&self, element: &E) -> bool {
        self.index.contains_key(&element.canonical_key())
    }

    /// Position of `element` in discovery order.
    pub fn position(&self, element: &E) -> Option<usize> {
        self.index.get(&element.canonical_key()).copied()
    }

    /// Elements in discovery order.
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// Iterates the elements in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }

    /// Consumes the closure, returning the elements.
    pub fn into_elements(self) -> Vec<E> {
        self.elements
    }

    /// Number of elements of each order.
    pub fn order_histogram(&self) -> BTreeMap<u64, usize> {
        let mut histogram = BTreeMap::new();
        for element in &self.elements {
            *histogram.entry(element.order()).or_insert(0) += 1;
        }
        histogram
    }

    /// First element found of each requested order; orders with no element
    /// are absent from the map.
    pub fn find_orders(&self, orders: &[u64]) -> BTreeMap<u64, E> {
        let wanted: HashSet<u64> = orders.iter().copied().collect();
        let mut found = BTreeMap::new();
        for element in &self.elements {
            if found.len() == wanted.len() {
                break;
            }
            let order = element.order();
            if wanted.contains(&order) {
                found.entry(order).or_insert_with(|| element.clone());
            }
        }
        found
    }

    /// Checks that every product of two elements is again an element.
    ///
    /// Quadratic in the size; meant for tests and small groups.
    pub fn is_closed_under_multiplication(&self) -> bool {
        self.elements
            .iter()
            .all(|a| self.elements.iter().all(|b| self.contains(&a.mul(b))))
    }
}

impl<'a, E: GroupElement> IntoIterator for &'a Closure<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Enumerates the subgroup generated by `generators` with default options.
pub fn enumerate<E: GroupElement>(generators: &[E]) -> Result<Closure<E>, MgenError> {
    enumerate_with(generators, &ClosureOpts::default())
}

/// Enumerates the subgroup generated by `generators`.
///
/// The generators seed a worklist; each unexplored element is multiplied on
/// the right by every generator and unseen products are appended. In a finite
/// group this reaches every element of the generated subgroup, identity
/// included.
pub fn enumerate_with<E: GroupElement>(
    generators: &[E],
    opts: &ClosureOpts,
) -> Result<Closure<E>, MgenError> {
    if generators.is_empty() {
        return Err(MgenError::Closure(ErrorInfo::new(
            "empty-generators",
            "closure requires at least one generator",
        )));
    }

    let mut closure = Closure {
        elements: Vec::new(),
        index: HashMap::new(),
    };
    for generator in generators {
        insert(&mut closure, generator.clone(), opts)?;
    }

    let mut next = 0;
    while next < closure.elements.len() {
        let current = closure.elements[next].clone();
        next += 1;
        for generator in generators {
            insert(&mut closure, current.mul(generator), opts)?;
        }
    }
    debug!(
        "closure of {} generators has {} elements",
        generators.len(),
        closure.len()
    );
    Ok(closure)
}

fn insert<E: GroupElement>(
    closure: &mut Closure<E>,
    element: E,
    opts: &ClosureOpts,
) -> Result<(), MgenError> {
    let key = element.canonical_key();
    if closure.index.contains_key(&key) {
        return Ok(());
    }
    if let Some(limit) = opts.max_elements {
        if closure.elements.len() >= limit {
            return Err(MgenError::Closure(
                ErrorInfo::new("closure-limit", "subgroup is larger than the configured limit")
                    .with_context("max_elements", limit.to_string())
                    .with_hint("raise ClosureOpts::max_elements or check the generators"),
            ));
        }
    }
    closure.index.insert(key, closure.elements.len());
    closure.elements.push(element);
    if opts.progress_every > 0 && closure.elements.len() % opts.progress_every == 0 {
        debug!("closure progress: {} elements", closure.elements.len());
    }
    Ok(())
}
