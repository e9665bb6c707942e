//! Validation categories: which parts of a member's surface get null checks.
//!
//! Categories form a bitset. Sets only ever combine by union.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// A single validation toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCategory {
    /// Input parameters are checked at entry.
    Arguments,
    /// Output parameters are checked after a successful call.
    OutValues,
    /// Return values are checked after a successful call.
    ReturnValues,
    /// Constructors and ordinary methods pass the gate.
    Methods,
    /// Property getters and setters pass the gate.
    Properties,
    /// Non-public members pass the gate.
    NonPublic,
}

impl ValidationCategory {
    pub const ALL: [ValidationCategory; 6] = [
        ValidationCategory::Arguments,
        ValidationCategory::OutValues,
        ValidationCategory::ReturnValues,
        ValidationCategory::Methods,
        ValidationCategory::Properties,
        ValidationCategory::NonPublic,
    ];

    fn bit(self) -> u8 {
        match self {
            ValidationCategory::Arguments => 1,
            ValidationCategory::OutValues => 1 << 1,
            ValidationCategory::ReturnValues => 1 << 2,
            ValidationCategory::Methods => 1 << 3,
            ValidationCategory::Properties => 1 << 4,
            ValidationCategory::NonPublic => 1 << 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationCategory::Arguments => "arguments",
            ValidationCategory::OutValues => "out_values",
            ValidationCategory::ReturnValues => "return_values",
            ValidationCategory::Methods => "methods",
            ValidationCategory::Properties => "properties",
            ValidationCategory::NonPublic => "non_public",
        }
    }
}

impl fmt::Display for ValidationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of enabled [`ValidationCategory`] toggles.
///
/// Serialized as a list of category names, e.g. `["arguments", "methods"]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<ValidationCategory>", into = "Vec<ValidationCategory>")]
pub struct ValidationCategories(u8);

impl ValidationCategories {
    /// Nothing is validated.
    pub const NONE: Self = Self(0);

    /// Every public-surface category. This is the default policy.
    pub const ALL_PUBLIC: Self = Self(0b1_1111);

    /// Every category, including non-public members.
    pub const ALL: Self = Self(0b11_1111);

    pub fn contains(&self, category: ValidationCategory) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn insert(&mut self, category: ValidationCategory) {
        self.0 |= category.bit();
    }

    pub fn with(mut self, category: ValidationCategory) -> Self {
        self.insert(category);
        self
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Enabled categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = ValidationCategory> + '_ {
        ValidationCategory::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl Default for ValidationCategories {
    fn default() -> Self {
        Self::ALL_PUBLIC
    }
}

impl From<ValidationCategory> for ValidationCategories {
    fn from(category: ValidationCategory) -> Self {
        Self(category.bit())
    }
}

impl FromIterator<ValidationCategory> for ValidationCategories {
    fn from_iter<I: IntoIterator<Item = ValidationCategory>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

impl From<Vec<ValidationCategory>> for ValidationCategories {
    fn from(categories: Vec<ValidationCategory>) -> Self {
        categories.into_iter().collect()
    }
}

impl From<ValidationCategories> for Vec<ValidationCategory> {
    fn from(categories: ValidationCategories) -> Self {
        categories.iter().collect()
    }
}

impl BitOr for ValidationCategories {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOr<ValidationCategory> for ValidationCategories {
    type Output = Self;

    fn bitor(self, rhs: ValidationCategory) -> Self {
        self.with(rhs)
    }
}

impl BitOr for ValidationCategory {
    type Output = ValidationCategories;

    fn bitor(self, rhs: Self) -> ValidationCategories {
        ValidationCategories::from(self).with(rhs)
    }
}

impl BitOrAssign<ValidationCategory> for ValidationCategories {
    fn bitor_assign(&mut self, rhs: ValidationCategory) {
        self.insert(rhs);
    }
}

impl fmt::Debug for ValidationCategories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
