//! Deployment configurations (TOE variants) and the active-set gate.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A configuration record as supplied by the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub active: bool,
}

impl Configuration {
    pub fn new(id: impl Into<String>, active: bool) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            active,
        }
    }
}

/// Set of currently active configuration ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveConfigurations {
    ids: HashSet<String>,
}

impl ActiveConfigurations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the active set from configuration records.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Configuration>,
    {
        records
            .into_iter()
            .filter(|c| c.active)
            .map(|c| c.id.clone())
            .collect()
    }

    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True if every required configuration is active.
    ///
    /// A single inactive or unknown id fails the gate. An empty requirement
    /// list always passes.
    #[must_use]
    pub fn permits(&self, required: &[String]) -> bool {
        required.iter().all(|id| self.ids.contains(id))
    }
}

impl<S: Into<String>> FromIterator<S> for ActiveConfigurations {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
