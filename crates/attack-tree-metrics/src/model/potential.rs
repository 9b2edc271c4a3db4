//! Attack potential tuples and scalar costs.
//!
//! Each dimension is an ordinal rating. The value [`INFEASIBLE_RATING`] is
//! reserved: a path with that rating in any dimension is practically
//! unachievable and its scalar cost is pinned to the sentinel instead of
//! being summed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rating reserved for "infeasible in this dimension".
pub const INFEASIBLE_RATING: u32 = 99;

/// Five-dimensional attacker effort estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AttackPotential {
    /// Elapsed time.
    #[serde(default)]
    pub time: u32,
    /// Specialist expertise.
    #[serde(default)]
    pub expertise: u32,
    /// Knowledge of the item or component.
    #[serde(default)]
    pub knowledge: u32,
    /// Window of opportunity / access.
    #[serde(default)]
    pub access: u32,
    /// Equipment.
    #[serde(default)]
    pub equipment: u32,
}

impl AttackPotential {
    /// Tuple with every dimension set to zero.
    pub const ZERO: Self = Self {
        time: 0,
        expertise: 0,
        knowledge: 0,
        access: 0,
        equipment: 0,
    };

    #[must_use]
    pub const fn new(time: u32, expertise: u32, knowledge: u32, access: u32, equipment: u32) -> Self {
        Self {
            time,
            expertise,
            knowledge,
            access,
            equipment,
        }
    }

    /// Dimensions in declaration order.
    #[must_use]
    pub const fn components(&self) -> [u32; 5] {
        [
            self.time,
            self.expertise,
            self.knowledge,
            self.access,
            self.equipment,
        ]
    }

    /// Component-wise maximum.
    ///
    /// Executing a compound attack costs at least the hardest requirement in
    /// each dimension.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self {
            time: self.time.max(other.time),
            expertise: self.expertise.max(other.expertise),
            knowledge: self.knowledge.max(other.knowledge),
            access: self.access.max(other.access),
            equipment: self.equipment.max(other.equipment),
        }
    }

    /// True if any dimension carries the infeasibility sentinel.
    #[must_use]
    pub fn is_infeasible(&self) -> bool {
        self.components().contains(&INFEASIBLE_RATING)
    }

    /// Scalar cost of this tuple.
    ///
    /// The sum of all dimensions, unless any dimension equals
    /// [`INFEASIBLE_RATING`], in which case the cost is exactly the sentinel.
    ///
    /// # Example
    /// ```
    /// use attack_tree_metrics::model::{AttackPotential, Cost};
    ///
    /// assert_eq!(AttackPotential::new(3, 4, 3, 2, 1).cost(), Cost::Finite(13));
    /// assert_eq!(AttackPotential::new(1, 99, 0, 0, 4).cost(), Cost::INFEASIBLE);
    /// ```
    #[must_use]
    pub fn cost(&self) -> Cost {
        if self.is_infeasible() {
            Cost::INFEASIBLE
        } else {
            Cost::Finite(self.components().iter().sum())
        }
    }
}

impl fmt::Display for AttackPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.time, self.expertise, self.knowledge, self.access, self.equipment
        )
    }
}

/// Scalar attack cost.
///
/// `Infinite` marks "no attack path at all" and orders above every finite
/// value, including the infeasibility sentinel. Serializes as a number, or
/// `null` for `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cost {
    Finite(u32),
    Infinite,
}

impl Cost {
    /// Cost of a path with an infeasible dimension.
    pub const INFEASIBLE: Self = Self::Finite(INFEASIBLE_RATING);

    #[must_use]
    pub fn is_infeasible(&self) -> bool {
        *self == Self::INFEASIBLE
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Finite value, if any.
    #[must_use]
    pub fn value(&self) -> Option<u32> {
        match self {
            Self::Finite(v) => Some(*v),
            Self::Infinite => None,
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{}", v),
            Self::Infinite => f.write_str("inf"),
        }
    }
}
