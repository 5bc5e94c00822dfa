//! Advisory validation of access annotations.
//!
//! [`trim`](crate::trim) never validates anything. Call [`validate`] (or a
//! configured [`Validator`]) explicitly, typically once in a test or at
//! startup, to find fields whose tags contradict each other.
//!
//! Default conflicting pairs:
//!
//! | Tag           | Conflicts with |
//! |---------------|----------------|
//! | `public`      | `private`      |
//! | `server-only` | `public`       |
//! | `server-only` | `private`      |
//!
//! `pub` + `priv` is how a field is shown to both audiences and is not a
//! conflict.

use crate::error::{ProjectionError, Result};
use crate::project::Project;
use tracing::warn;

/// Tag pairs that may not share a field by default.
pub const DEFAULT_RULES: &[(&str, &str)] = &[
    ("public", "private"),
    ("server-only", "public"),
    ("server-only", "private"),
];

/// A field carrying both tags of a conflicting pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub field: &'static str,
    pub tags: (String, String),
}

/// Checks record annotations against a set of conflicting tag pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    rules: Vec<(String, String)>,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES
                .iter()
                .map(|(a, b)| ((*a).to_string(), (*b).to_string()))
                .collect(),
        }
    }
}

impl Validator {
    /// Validator with [`DEFAULT_RULES`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a conflicting pair.
    pub fn with_rule(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.rules.push((a.into(), b.into()));
        self
    }

    /// Returns every conflict in `T`, in field order then rule order.
    pub fn check<T: Project>(&self) -> Vec<Conflict> {
        let mut conflicts = Vec::new();

        for field in T::FIELDS {
            let annotation = field.annotation();
            for (a, b) in &self.rules {
                if annotation.contains(a) && annotation.contains(b) {
                    warn!(
                        record = T::NAME,
                        field = field.name,
                        tags = %format!("{a}+{b}"),
                        "Conflicting access annotation"
                    );
                    conflicts.push(Conflict {
                        field: field.name,
                        tags: (a.clone(), b.clone()),
                    });
                }
            }
        }

        conflicts
    }

    /// Fails with [`ProjectionError::ConflictingAnnotation`] if `T` has any
    /// conflict. Each offending field is listed once.
    pub fn ensure<T: Project>(&self) -> Result<()> {
        let mut fields: Vec<String> = Vec::new();
        for conflict in self.check::<T>() {
            if !fields.iter().any(|f| f == conflict.field) {
                fields.push(conflict.field.to_string());
            }
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ProjectionError::ConflictingAnnotation {
                record: T::NAME,
                fields,
            })
        }
    }
}

/// Checks `T` against [`DEFAULT_RULES`].
pub fn validate<T: Project>() -> Vec<Conflict> {
    Validator::new().check::<T>()
}
