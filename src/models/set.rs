use serde::{Deserialize, Serialize};

use crate::config;

// ---------------------------------------------------------------------------
// SetInfo: one card set
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetInfo {
    pub code: String,
    pub name: String,
}

impl SetInfo {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// SetCatalog: sets in declaration (release) order
// ---------------------------------------------------------------------------

/// Ordered list of known sets.
///
/// Declaration order is the catalog order used when sorting or grouping by
/// set. Cards may reference set codes that are not declared here; such cards
/// order after every declared set and display their raw set code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetCatalog {
    sets: Vec<SetInfo>,
}

impl Default for SetCatalog {
    fn default() -> Self {
        Self::new(config::default_sets())
    }
}

impl SetCatalog {
    pub fn new(sets: Vec<SetInfo>) -> Self {
        Self { sets }
    }

    pub fn sets(&self) -> &[SetInfo] {
        &self.sets
    }

    pub fn get(&self, code: &str) -> Option<&SetInfo> {
        self.sets.iter().find(|s| s.code == code)
    }

    /// Catalog position of a set code, or `None` for undeclared codes.
    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.sets.iter().position(|s| s.code == code)
    }

    /// Sort rank of a set code; undeclared codes rank last.
    pub fn rank(&self, code: &str) -> usize {
        self.index_of(code).unwrap_or(self.sets.len())
    }

    /// Display name of a set code, falling back to the code itself.
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.get(code).map(|s| s.name.as_str()).unwrap_or(code)
    }
}
