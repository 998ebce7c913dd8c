//! Reverse-dependency filtering.
//!
//! Given a target module, collect every edge that lies on some chain of
//! requirements ending at that target: the edges into the target itself,
//! the edges into each module that requires the target, and so on
//! transitively.
//!
//! The walk is depth-first. Each module is expanded at most once, which is
//! what makes the walk terminate on cyclic input, and each distinct edge is
//! reported at most once. An edge whose source has already been expanded is
//! still reported (it is part of a chain to the target), it just does not
//! trigger a second expansion.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::Edge;

/// Edges whose dependency is exactly `module`, in edge-list order.
///
/// A linear scan; [`DependentsFilter`] keeps an index for repeated lookups.
pub fn users_of<'a>(edges: &'a [Edge], module: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
    edges.iter().filter(move |edge| edge.dependency == module)
}

/// Collect every edge on a chain of requirements that reaches `target`.
///
/// Returns an empty list when nothing depends on `target`. The order is the
/// depth-first discovery order: an edge is followed by the edges reaching its
/// source. Callers that only care about membership should sort the result.
pub fn filter_dependents(edges: &[Edge], target: &str) -> Vec<Edge> {
    DependentsFilter::new(edges).dependents_of(target)
}

/// Reverse-dependency walker over a borrowed edge list.
///
/// Construction indexes the edges by dependency once; every
/// [`DependentsFilter::dependents_of`] call then starts with a fresh visited
/// set, so one filter can answer queries for several targets.
#[derive(Debug, Clone)]
pub struct DependentsFilter<'a> {
    users: FxHashMap<&'a str, Vec<&'a Edge>>,
}

impl<'a> DependentsFilter<'a> {
    pub fn new(edges: &'a [Edge]) -> Self {
        let mut users: FxHashMap<&'a str, Vec<&'a Edge>> = FxHashMap::default();
        for edge in edges {
            users.entry(edge.dependency.as_str()).or_default().push(edge);
        }
        Self { users }
    }

    /// Direct users of `module`, in edge-list order.
    pub fn users_of(&self, module: &str) -> &[&'a Edge] {
        self.users.get(module).map(Vec::as_slice).unwrap_or_default()
    }

    /// See [`filter_dependents`].
    pub fn dependents_of(&self, target: &str) -> Vec<Edge> {
        let mut expanded: FxHashSet<&str> = FxHashSet::default();
        let mut emitted: FxHashSet<&Edge> = FxHashSet::default();
        let mut result = Vec::new();

        expanded.insert(target);

        // Explicit stack of per-module cursors instead of recursion so a
        // long requirement chain cannot exhaust the call stack.
        let mut stack = vec![self.users_of(target).iter()];

        while let Some(users) = stack.last_mut() {
            let Some(&edge) = users.next() else {
                stack.pop();
                continue;
            };

            if emitted.insert(edge) {
                result.push(edge.clone());
            }

            if expanded.insert(edge.module.as_str()) {
                stack.push(self.users_of(&edge.module).iter());
            }
        }

        debug!(
            module = target,
            edges = result.len(),
            modules = expanded.len() - 1,
            "filtered reverse dependencies"
        );
        result
    }

    /// Names of every module that transitively depends on `target`.
    ///
    /// The target itself is only included when it sits on a cycle.
    pub fn dependent_modules(&self, target: &str) -> Vec<String> {
        let mut seen = FxHashSet::default();
        self.dependents_of(target)
            .into_iter()
            .filter_map(|edge| seen.insert(edge.module.clone()).then_some(edge.module))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TESTMOD: &str = "github.com/poloxue/testmod";
    const TEXT_V032: &str = "golang.org/x/text@v0.3.2";
    const TEXT_OLD: &str = "golang.org/x/text@v0.0.0-20170915032832-14c0d48ead0c";
    const TOOLS: &str = "golang.org/x/tools@v0.0.0-20180917221912-90fa682c2a6e";
    const QUOTE: &str = "rsc.io/quote/v3@v3.1.0";
    const SAMPLER_130: &str = "rsc.io/sampler@v1.3.0";
    const SAMPLER_131: &str = "rsc.io/sampler@v1.3.1";

    fn sample() -> Vec<Edge> {
        vec![
            Edge::new(TESTMOD, TEXT_V032),
            Edge::new(TESTMOD, QUOTE),
            Edge::new(TESTMOD, SAMPLER_131),
            Edge::new(TEXT_V032, TOOLS),
            Edge::new(QUOTE, SAMPLER_130),
            Edge::new(SAMPLER_131, TEXT_OLD),
            Edge::new(SAMPLER_130, TEXT_OLD),
        ]
    }

    fn sorted(mut edges: Vec<Edge>) -> Vec<Edge> {
        edges.sort();
        edges
    }

    #[test]
    fn test_users_of() {
        let edges = sample();
        let users: Vec<_> = users_of(&edges, TEXT_OLD).cloned().collect();
        assert_eq!(
            users,
            vec![Edge::new(SAMPLER_131, TEXT_OLD), Edge::new(SAMPLER_130, TEXT_OLD)]
        );
        assert_eq!(users_of(&edges, TESTMOD).count(), 0);
    }

    #[test]
    fn test_single_layer() {
        let got = filter_dependents(&sample(), TEXT_V032);
        assert_eq!(got, vec![Edge::new(TESTMOD, TEXT_V032)]);
    }

    #[test]
    fn test_two_layers() {
        let got = filter_dependents(&sample(), SAMPLER_130);
        assert_eq!(
            sorted(got),
            sorted(vec![Edge::new(TESTMOD, QUOTE), Edge::new(QUOTE, SAMPLER_130)])
        );
    }

    #[test]
    fn test_deep_keeps_every_path() {
        let got = filter_dependents(&sample(), TEXT_OLD);
        assert_eq!(
            sorted(got),
            sorted(vec![
                Edge::new(TESTMOD, QUOTE),
                Edge::new(TESTMOD, SAMPLER_131),
                Edge::new(QUOTE, SAMPLER_130),
                Edge::new(SAMPLER_131, TEXT_OLD),
                Edge::new(SAMPLER_130, TEXT_OLD),
            ])
        );
    }

    #[test]
    fn test_depth_first_order() {
        let got = filter_dependents(&sample(), TEXT_OLD);
        assert_eq!(
            got,
            vec![
                Edge::new(SAMPLER_131, TEXT_OLD),
                Edge::new(TESTMOD, SAMPLER_131),
                Edge::new(SAMPLER_130, TEXT_OLD),
                Edge::new(QUOTE, SAMPLER_130),
                Edge::new(TESTMOD, QUOTE),
            ]
        );
    }

    #[test]
    fn test_diamond_captures_both_paths() {
        let edges = vec![Edge::new("A", "B"), Edge::new("B", "C"), Edge::new("A", "C")];
        let got = filter_dependents(&edges, "C");
        assert_eq!(
            sorted(got),
            sorted(vec![Edge::new("A", "B"), Edge::new("B", "C"), Edge::new("A", "C")])
        );
    }

    #[test]
    fn test_no_users_is_empty() {
        assert!(filter_dependents(&sample(), TESTMOD).is_empty());
        assert!(filter_dependents(&sample(), "not/in/graph@v1.0.0").is_empty());
        assert!(filter_dependents(&[], "anything").is_empty());
    }

    #[test]
    fn test_cycle_terminates_for_every_member() {
        let edges = vec![Edge::new("A", "B"), Edge::new("B", "C"), Edge::new("C", "A")];
        for target in ["A", "B", "C"] {
            let got = filter_dependents(&edges, target);
            assert_eq!(sorted(got), sorted(edges.clone()), "target {target}");
        }
    }

    #[test]
    fn test_self_loop_reported_once() {
        let edges = vec![
            Edge::new("m", "m"),
            Edge::new("app", "m"),
            Edge::new("m", "m"),
        ];
        let got = filter_dependents(&edges, "m");
        assert_eq!(got, vec![Edge::new("m", "m"), Edge::new("app", "m")]);
    }

    #[test]
    fn test_repeated_edges_are_not_duplicated() {
        let edges = vec![
            Edge::new("a", "b"),
            Edge::new("a", "b"),
            Edge::new("root", "a"),
        ];
        let got = filter_dependents(&edges, "b");
        assert_eq!(got, vec![Edge::new("a", "b"), Edge::new("root", "a")]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let edges = sample();
        let once = filter_dependents(&edges, TEXT_OLD);
        let twice = filter_dependents(&once, TEXT_OLD);
        assert_eq!(sorted(once), sorted(twice));
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let depth = 100_000;
        let edges: Vec<Edge> = (0..depth)
            .map(|i| Edge::new(format!("m{}", i + 1), format!("m{i}")))
            .collect();

        let got = filter_dependents(&edges, "m0");
        assert_eq!(got.len(), depth);
        assert_eq!(got.first(), Some(&Edge::new("m1", "m0")));
        assert_eq!(
            got.last(),
            Some(&Edge::new(format!("m{depth}"), format!("m{}", depth - 1)))
        );
    }

    #[test]
    fn test_dependent_modules() {
        let edges = sample();
        let filter = DependentsFilter::new(&edges);
        let mut modules = filter.dependent_modules(TEXT_OLD);
        modules.sort();
        assert_eq!(modules, vec![TESTMOD, QUOTE, SAMPLER_130, SAMPLER_131]);
    }
}
