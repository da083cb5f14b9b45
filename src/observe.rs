//! Visibility-observer options and one-shot watch lists.
//!
//! Reveals and lazy images both follow the same discipline: an element is
//! watched until it first becomes visible, its effect fires once, and the
//! element is released immediately. [`OneShotWatch`] tracks that lifecycle
//! independently of the browser's `IntersectionObserver`, so the "at most
//! once" guarantee holds even if the observer reports an element twice.

#[cfg(test)]
#[path = "observe_test.rs"]
mod observe_test;

use serde::Deserialize;

/// Options handed to an `IntersectionObserver`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObserverOptions {
    /// Visible fraction required to count as intersecting.
    pub threshold: f64,
    /// CSS margin around the viewport, e.g. `"0px 0px -50px 0px"`.
    pub root_margin: String,
}

impl ObserverOptions {
    #[must_use]
    pub fn new(threshold: f64, root_margin: &str) -> Self {
        Self { threshold, root_margin: root_margin.to_owned() }
    }

    /// Whether the browser will accept these options.
    ///
    /// `IntersectionObserver` throws on a threshold outside `[0, 1]` and on a
    /// root margin that is not one to four `px` or `%` lengths.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.threshold) && is_valid_root_margin(&self.root_margin)
    }
}

fn is_valid_root_margin(margin: &str) -> bool {
    let count = margin.split_whitespace().count();
    (1..=4).contains(&count) && margin.split_whitespace().all(is_length)
}

fn is_length(token: &str) -> bool {
    token
        .strip_suffix("px")
        .or_else(|| token.strip_suffix('%'))
        .is_some_and(|number| number.parse::<f64>().is_ok_and(f64::is_finite))
}

/// Elements awaiting a one-shot effect.
#[derive(Debug, Clone)]
pub struct OneShotWatch<T> {
    pending: Vec<T>,
}

impl<T> Default for OneShotWatch<T> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<T: PartialEq> OneShotWatch<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `item`. Returns `false` if it is already watched.
    pub fn watch(&mut self, item: T) -> bool {
        if self.pending.contains(&item) {
            return false;
        }
        self.pending.push(item);
        true
    }

    /// Release `item` and report whether its effect should fire.
    ///
    /// Returns `true` only for the first call after [`Self::watch`]; later
    /// calls (or calls for unknown items) return `false`.
    pub fn fire(&mut self, item: &T) -> bool {
        let Some(pos) = self.pending.iter().position(|p| p == item) else {
            return false;
        };
        self.pending.swap_remove(pos);
        true
    }

    #[cfg(test)]
    pub(crate) fn is_watching(&self, item: &T) -> bool {
        self.pending.contains(item)
    }

    /// Number of items still awaiting their effect.
    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.pending.len()
    }
}
