// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-view visibility flags.

use std::{fmt, ops::BitOr};

/// Set of views a member appears in.
///
/// | Flag | Bit |
/// |------|-----|
/// | `DETAILS` | 1 |
/// | `INDEX` | 2 |
/// | `EDIT` | 4 |
/// | `READONLY` | 8 |
/// | `CREATE` | 16 |
///
/// `READONLY` does not add a view; it turns an edit or create field into a
/// display-only one.
///
/// # Example
///
/// ```rust
/// use scaffold_core::MemberDisplay;
///
/// let flags = MemberDisplay::DETAILS | MemberDisplay::READONLY;
/// assert!(flags.contains(MemberDisplay::DETAILS));
/// assert!(!flags.contains(MemberDisplay::INDEX));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MemberDisplay(u8);

impl MemberDisplay {
    /// No views.
    pub const NONE: Self = Self(0);

    /// Shown on the details and delete views.
    pub const DETAILS: Self = Self(1);

    /// Shown as a column of the index view.
    pub const INDEX: Self = Self(2);

    /// Shown on the edit form.
    pub const EDIT: Self = Self(4);

    /// Shown but not editable on forms.
    pub const READONLY: Self = Self(8);

    /// Shown on the create form.
    pub const CREATE: Self = Self(16);

    /// Every view except read-only.
    pub const DEFAULT: Self = Self(1 | 2 | 4 | 16);

    /// Raw bit pattern.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if every flag of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Union of two flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for MemberDisplay {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BitOr for MemberDisplay {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Debug for MemberDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(MemberDisplay, &str); 5] = [
            (MemberDisplay::DETAILS, "Details"),
            (MemberDisplay::INDEX, "Index"),
            (MemberDisplay::EDIT, "Edit"),
            (MemberDisplay::READONLY, "Readonly"),
            (MemberDisplay::CREATE, "Create")
        ];

        let set: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "MemberDisplay({})", set.join(" | "))
    }
}
