//! Agregación de resultados de checks en tasas de éxito.

use rayon::prelude::*;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::checks::{evaluate, CheckOutcome, Sample};
use crate::config::HarnessConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub passes: u64,
    pub fails: u64,
}

impl Counts {
    pub fn total(&self) -> u64 {
        self.passes + self.fails
    }

    /// Fracción de éxitos en [0, 1]; `None` si no hay observaciones.
    pub fn rate(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.passes as f64 / total as f64),
        }
    }
}

/// Conteos por nombre de check. `merge` es asociativa y conmutativa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckTally {
    checks: BTreeMap<String, Counts>,
}

impl CheckTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &CheckOutcome) {
        let counts = self.checks.entry(outcome.name.clone()).or_default();
        if outcome.passed {
            counts.passes += 1;
        } else {
            counts.fails += 1;
        }
    }

    pub fn record_all(&mut self, outcomes: &[CheckOutcome]) {
        for o in outcomes {
            self.record(o);
        }
    }

    pub fn merge(mut self, other: Self) -> Self {
        for (name, c) in other.checks {
            let counts = self.checks.entry(name).or_default();
            counts.passes += c.passes;
            counts.fails += c.fails;
        }
        self
    }

    pub fn counts(&self, name: &str) -> Option<Counts> {
        self.checks.get(name).copied()
    }

    pub fn success_rate(&self, name: &str) -> Option<f64> {
        self.counts(name).and_then(|c| c.rate())
    }

    pub fn overall_rate(&self) -> Option<f64> {
        let total = self.checks.values().fold(Counts::default(), |acc, c| Counts {
            passes: acc.passes + c.passes,
            fails: acc.fails + c.fails,
        });
        total.rate()
    }

    pub fn all_passed(&self) -> bool {
        self.checks.values().all(|c| c.fails == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Counts)> + '_ {
        self.checks.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl fmt::Display for CheckTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, c) in self.iter() {
            let pct = c.rate().unwrap_or(0.0) * 100.0;
            writeln!(f, "{name}: {pct:.2}% ({} passed, {} failed)", c.passes, c.fails)?;
        }
        Ok(())
    }
}

/// Evalúa todas las muestras en paralelo y acumula sus checks.
pub fn run_samples(samples: &[Sample], expected: &Value, cfg: &HarnessConfig) -> CheckTally {
    samples
        .par_iter()
        .fold(CheckTally::new, |mut tally, sample| {
            tally.record_all(&evaluate(sample, expected, cfg));
            tally
        })
        .reduce(CheckTally::new, CheckTally::merge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tally_has_no_rate() {
        let t = CheckTally::new();
        assert!(t.is_empty());
        assert_eq!(t.overall_rate(), None);
        assert_eq!(t.success_rate("x"), None);
        assert!(t.all_passed());
    }

    #[test]
    fn rates_per_check_and_overall() {
        let mut t = CheckTally::new();
        t.record_all(&[
            CheckOutcome::new("a", true),
            CheckOutcome::new("a", false),
            CheckOutcome::new("b", true),
            CheckOutcome::new("b", true),
        ]);
        assert_eq!(t.success_rate("a"), Some(0.5));
        assert_eq!(t.success_rate("b"), Some(1.0));
        assert_eq!(t.overall_rate(), Some(0.75));
        assert!(!t.all_passed());
        assert_eq!(t.to_string(), "a: 50.00% (1 passed, 1 failed)\nb: 100.00% (2 passed, 0 failed)\n");
    }

    #[test]
    fn merge_adds_counts() {
        let mut left = CheckTally::new();
        left.record(&CheckOutcome::new("a", true));
        let mut right = CheckTally::new();
        right.record(&CheckOutcome::new("a", false));
        right.record(&CheckOutcome::new("c", true));
        let merged = left.clone().merge(right.clone());
        assert_eq!(merged.counts("a"), Some(Counts { passes: 1, fails: 1 }));
        assert_eq!(merged.counts("c"), Some(Counts { passes: 1, fails: 0 }));
        assert_eq!(merged, right.merge(left));
    }
}
