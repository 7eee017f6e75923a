use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Fixed logical role of an input table. Strain names never drive any
/// computation, they are only mapped onto these roles at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParentRole {
    Parent1,
    Parent2,
}

impl ParentRole {
    pub const ALL: [ParentRole; 2] = [ParentRole::Parent1, ParentRole::Parent2];

    pub fn tag(&self) -> &'static str {
        match self {
            ParentRole::Parent1 => "p1",
            ParentRole::Parent2 => "p2",
        }
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            ParentRole::Parent1 => "Parent 1",
            ParentRole::Parent2 => "Parent 2",
        }
    }
}

impl Display for ParentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.default_label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParentLabels {
    parent1_strain: Option<String>,
    parent2_strain: Option<String>,
}

impl ParentLabels {
    /// Blank strain names are treated as absent.
    pub fn new(parent1_strain: Option<String>, parent2_strain: Option<String>) -> Self {
        let clean = |s: Option<String>| {
            s.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        ParentLabels {
            parent1_strain: clean(parent1_strain),
            parent2_strain: clean(parent2_strain),
        }
    }

    pub fn strain(&self, role: ParentRole) -> Option<&str> {
        match role {
            ParentRole::Parent1 => self.parent1_strain.as_deref(),
            ParentRole::Parent2 => self.parent2_strain.as_deref(),
        }
    }

    pub fn display(&self, role: ParentRole) -> &str {
        self.strain(role).unwrap_or(role.default_label())
    }

    /// Column suffix for the given role. Strain names are only usable as
    /// suffixes when both are present and distinct, otherwise the joined
    /// columns would collide again.
    pub fn suffix(&self, role: ParentRole) -> String {
        match (&self.parent1_strain, &self.parent2_strain) {
            (Some(p1), Some(p2)) if p1 != p2 => match role {
                ParentRole::Parent1 => p1.clone(),
                ParentRole::Parent2 => p2.clone(),
            },
            _ => role.tag().to_string(),
        }
    }
}
