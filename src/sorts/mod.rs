//! The seven sorting algorithms under measurement.
//!
//! Each module exposes a free `sort_by` over a mutable slice and a strict
//! less-than predicate; radix is value-based and exposes `sort` instead.
//! [`Algorithm`] ties them together for the selection registry and the
//! harness.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;

use crate::error::Error;

/// Strict less-than predicate used by every comparison sort in the harness.
pub fn i64_less(a: &i64, b: &i64) -> bool {
    a < b
}

/// One sortable algorithm, tagged with the bitmask encoding used by the CLI.
///
/// The discriminants are the wire bits and must stay bit-for-bit compatible:
/// insertion=1, selection=2, bubble=4, shell=8, quick=16, merge=32, radix=64.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Algorithm {
    Insertion = 1,
    Selection = 2,
    Bubble = 4,
    Shell = 8,
    Quick = 16,
    Merge = 32,
    Radix = 64,
}

impl Algorithm {
    /// Mask with every algorithm enabled.
    pub const ALL: u32 = 127;

    /// Declaration order. Registry iteration and CSV column order both
    /// follow this, not the numeric bit values.
    pub const ORDER: [Algorithm; 7] = [
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::Shell,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Radix,
    ];

    pub fn bit(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Bubble => "bubble",
            Algorithm::Shell => "shell",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Radix => "radix",
        }
    }

    /// Runs the algorithm over `v` with `is_less`. Radix ignores the
    /// predicate and fails on negative values; the comparison sorts cannot
    /// fail.
    pub fn run(
        self,
        v: &mut [i64],
        is_less: fn(&i64, &i64) -> bool,
    ) -> Result<(), Error> {
        match self {
            Algorithm::Insertion => insertion::sort_by(v, is_less),
            Algorithm::Selection => selection::sort_by(v, is_less),
            Algorithm::Bubble => bubble::sort_by(v, is_less),
            Algorithm::Shell => shell::sort_by(v, is_less),
            Algorithm::Quick => quick::sort_by(v, is_less),
            Algorithm::Merge => merge::sort_by(v, is_less),
            Algorithm::Radix => return radix::sort(v),
        }

        Ok(())
    }
}
