//! Validation diagnostics collection and rendering.

use std::fmt;

/// Which declared relation an issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// The merged ordering relation (declared syncs-after plus the
    /// ordering implied by triggered-by).
    SyncsAfter,
    /// The trigger relation (reverse index of triggered-by declarations).
    Triggers,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::SyncsAfter => write!(f, "syncs-after"),
            EdgeKind::Triggers => write!(f, "triggered-by"),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A declared edge points at an id absent from the adjacency map.
    DanglingReference {
        emitter: String,
        reference: String,
        kind: EdgeKind,
    },
    /// A closed loop in one of the two edge relations. `path` runs from
    /// the cycle's start back to the repeated id.
    Cycle { path: Vec<String>, kind: EdgeKind },
    /// A group names an id outside the adjacency map.
    UnknownGroupMember { group: String, member: String },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::DanglingReference {
                emitter,
                reference,
                kind: EdgeKind::SyncsAfter,
            } => write!(
                f,
                "emitter '{emitter}' syncs after '{reference}' but '{reference}' is not declared"
            ),
            Issue::DanglingReference {
                emitter,
                reference,
                kind: EdgeKind::Triggers,
            } => write!(
                f,
                "emitter '{emitter}' triggers '{reference}' but '{reference}' is not declared"
            ),
            // triggered-by induces ordering, so both relations are named
            // as the potential cause of an ordering cycle.
            Issue::Cycle {
                path,
                kind: EdgeKind::SyncsAfter,
            } => write!(
                f,
                "emitters form a cycle through the syncs-after or triggered-by \
                 dependencies: {}",
                path.join(" -> ")
            ),
            Issue::Cycle {
                path,
                kind: EdgeKind::Triggers,
            } => write!(
                f,
                "emitters form a cycle through the triggered-by dependencies: {}",
                path.join(" -> ")
            ),
            Issue::UnknownGroupMember { group, member } => write!(
                f,
                "group '{group}' names '{member}' which is not a declared emitter"
            ),
        }
    }
}

/// An explicit collector for validation findings, threaded through the
/// validator and index builder and handed back to the caller.
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub issues: Vec<Issue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return write!(f, "no validation issues");
        }
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}
