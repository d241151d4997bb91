//! Rule composition engine.

use std::cmp::Ordering;

use super::rules::PriorityRule;

/// Engine for composing and applying sequential priority rules.
///
/// # Examples
///
/// ```
/// use u_seating::model::{Guest, GuestId, Role};
/// use u_seating::sequencing::{RoleRank, RuleEngine, SequenceContext};
///
/// let guests = vec![
///     Guest::new(GuestId(1), "Ana"),
///     Guest::new(GuestId(2), "Ben").with_role(Role::Groomsman),
/// ];
/// let engine = RuleEngine::new().with_rule(RoleRank);
/// let sorted = engine.sort(&guests, &SequenceContext::default());
/// assert_eq!(sorted[0].id, GuestId(2));
/// ```
pub struct RuleEngine<T, C> {
    rules: Vec<Box<dyn PriorityRule<T, C>>>,
    epsilon: f64,
}

impl<T, C> RuleEngine<T, C> {
    /// Creates an engine with no rules.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Appends a rule. Earlier rules dominate later ones.
    pub fn with_rule<R: PriorityRule<T, C> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends a rule only when `enabled`.
    pub fn with_rule_if<R: PriorityRule<T, C> + 'static>(self, enabled: bool, rule: R) -> Self {
        if enabled {
            self.with_rule(rule)
        } else {
            self
        }
    }

    /// Returns the number of rules in this engine.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    fn compute_scores(&self, item: &T, context: &C) -> Vec<f64> {
        self.rules.iter().map(|r| r.score(item, context)).collect()
    }

    /// Sorts items by priority (lowest score first).
    ///
    /// Returns indices into the original slice. Ties keep input order.
    pub fn sort_indices(&self, items: &[T], context: &C) -> Vec<usize> {
        if self.rules.is_empty() {
            return (0..items.len()).collect();
        }

        let scores: Vec<Vec<f64>> = items
            .iter()
            .map(|item| self.compute_scores(item, context))
            .collect();

        let mut indices: Vec<usize> = (0..items.len()).collect();

        indices.sort_by(|&a, &b| {
            for (va, vb) in scores[a].iter().zip(scores[b].iter()) {
                if va == vb {
                    continue;
                }
                let diff = va - vb;
                if diff.is_nan() || diff.abs() > self.epsilon {
                    return va.partial_cmp(vb).unwrap_or(Ordering::Equal);
                }
            }
            Ordering::Equal
        });

        indices
    }

    /// Sorts items by priority and returns references in sorted order.
    pub fn sort<'a>(&self, items: &'a [T], context: &C) -> Vec<&'a T> {
        self.sort_indices(items, context)
            .into_iter()
            .map(|i| &items[i])
            .collect()
    }
}

impl<T, C> Default for RuleEngine<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
