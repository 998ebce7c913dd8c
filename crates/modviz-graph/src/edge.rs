use std::fmt;

use serde::{Deserialize, Serialize};

/// A single `module -> dependency` relation.
///
/// Module names are opaque: equality is an exact, case-sensitive match and a
/// version suffix such as `@v1.3.0` is part of the identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    /// The module that declares the requirement.
    pub module: String,
    /// The module being required.
    pub dependency: String,
}

impl Edge {
    /// Create an edge from `module` to `dependency`.
    pub fn new(module: impl Into<String>, dependency: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            dependency: dependency.into(),
        }
    }

    /// Returns true if the edge points from a module to itself.
    pub fn is_self_loop(&self) -> bool {
        self.module == self.dependency
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.module, self.dependency)
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for Edge {
    fn from((module, dependency): (A, B)) -> Self {
        Self::new(module, dependency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let edge = Edge::new("github.com/poloxue/testmod", "rsc.io/sampler@v1.3.1");
        assert_eq!(
            edge.to_string(),
            "github.com/poloxue/testmod -> rsc.io/sampler@v1.3.1"
        );
    }

    #[test]
    fn test_version_suffix_is_part_of_identity() {
        let a = Edge::new("m", "rsc.io/sampler@v1.3.0");
        let b = Edge::new("m", "rsc.io/sampler@v1.3.1");
        assert_ne!(a, b);
        assert_ne!(Edge::new("M", "x"), Edge::new("m", "x"));
    }

    #[test]
    fn test_ordering_sorts_by_module_then_dependency() {
        let mut edges = vec![
            Edge::new("b", "a"),
            Edge::new("a", "z"),
            Edge::new("a", "b"),
        ];
        edges.sort();
        assert_eq!(
            edges,
            vec![Edge::new("a", "b"), Edge::new("a", "z"), Edge::new("b", "a")]
        );
    }

    #[test]
    fn test_self_loop() {
        assert!(Edge::new("m", "m").is_self_loop());
        assert!(!Edge::from(("m", "n")).is_self_loop());
    }
}
