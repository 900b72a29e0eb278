//! Iteration modes
//!
//! A [`Mode`] is a bitmask over four independent suspension flags. A
//! [`GraphIterator`](crate::GraphIterator) pauses and yields control to its
//! caller whenever the status of the current step intersects the configured
//! mode. Composing flags with `|` selects a traversal style without needing
//! a separate algorithm per style:
//!
//! ```text
//! Tree:  X { a { a1, a2 }, b { b1, b2 } }
//!
//! ENTER               X, a, b
//! EXIT                a, b, X
//! LEAF                a1, a2, b1, b2
//! SIBLING_STEP        a, X, b
//! ENTER | LEAF        X, a, a1, a2, b, b1, b2     (pre-order, the default)
//! EXIT | LEAF         a1, a2, a, b1, b2, b, X     (post-order)
//! !LEAF               X, a, a, a, X, b, b, b, X
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Bitmask selecting which traversal states yield control to the caller.
///
/// Negation is truncated to the four defined flags, so `!Mode::LEAF` is
/// exactly `ENTER | EXIT | SIBLING_STEP`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Mode(u8);

impl From<u8> for Mode {
    fn from(bits: u8) -> Mode {
        Mode::from_bits(bits)
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> u8 {
        mode.bits()
    }
}

impl Mode {
    /// Yield nothing; traversal still runs to completion.
    pub const NONE: Mode = Mode(0);

    /// Yield when a node is activated and has at least one child.
    pub const ENTER: Mode = Mode(1);

    /// Yield when a node is activated and has no children.
    pub const LEAF: Mode = Mode(2);

    /// Yield when a node is deactivated and it had at least one child.
    pub const EXIT: Mode = Mode(4);

    /// Yield when control passes from an exited node directly to its next
    /// sibling. The yielded value is the common parent (the stack top).
    pub const SIBLING_STEP: Mode = Mode(8);

    /// Yield at every step.
    pub const ALL: Mode = Mode(1 | 2 | 4 | 8);

    /// Pre-order iteration: every node when entered.
    pub const DEFAULT: Mode = Mode(1 | 2);

    /// Post-order ("depth first") iteration: every node when left.
    pub const DEPTH_FIRST: Mode = Mode(4 | 2);

    /// Raw bit representation.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Build a mode from raw bits, ignoring bits outside the defined flags.
    pub fn from_bits(bits: u8) -> Mode {
        Mode(bits & Mode::ALL.0)
    }

    /// True if every flag of `other` is set in `self`.
    pub fn contains(self, other: Mode) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if `self` and `other` share at least one flag.
    pub fn intersects(self, other: Mode) -> bool {
        self.0 & other.0 != 0
    }

    /// True if no flag is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Mode {
    type Output = Mode;

    fn bitor(self, rhs: Mode) -> Mode {
        Mode(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mode {
    fn bitor_assign(&mut self, rhs: Mode) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Mode {
    type Output = Mode;

    fn bitand(self, rhs: Mode) -> Mode {
        Mode(self.0 & rhs.0)
    }
}

impl BitAndAssign for Mode {
    fn bitand_assign(&mut self, rhs: Mode) {
        self.0 &= rhs.0;
    }
}

impl Not for Mode {
    type Output = Mode;

    fn not(self) -> Mode {
        Mode(!self.0 & Mode::ALL.0)
    }
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        let mut first = true;
        for (flag, name) in [
            (Mode::ENTER, "ENTER"),
            (Mode::LEAF, "LEAF"),
            (Mode::EXIT, "EXIT"),
            (Mode::SIBLING_STEP, "SIBLING_STEP"),
        ] {
            if self.contains(flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        Ok(())
    }
}
