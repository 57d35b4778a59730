//! Input-shape scenarios for the benchmark windows.
//!
//! Every scenario is defined relative to "already sorted": the window is
//! first forced into ascending order with a fixed bubble-style pass, then
//! the named transform is applied on top of that canonical state.

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;

/// One named input shape, tagged with the bitmask encoding used by the CLI.
///
/// The discriminants are the wire bits and must stay bit-for-bit compatible:
/// notDecreasing=1, notGrowing=2, random=4, 75%=8, 50%=16, 25%=32.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Scenario {
    NotDecreasing = 1,
    NotGrowing = 2,
    Random = 4,
    Definitive75 = 8,
    Definitive50 = 16,
    Definitive25 = 32,
}

impl Scenario {
    /// Mask with every scenario enabled.
    pub const ALL: u32 = 63;

    /// Declaration order; registry iteration follows this.
    pub const ORDER: [Scenario; 6] = [
        Scenario::NotDecreasing,
        Scenario::NotGrowing,
        Scenario::Random,
        Scenario::Definitive75,
        Scenario::Definitive50,
        Scenario::Definitive25,
    ];

    pub fn bit(self) -> u32 {
        self as u32
    }

    /// Wire name, also the per-scenario CSV file stem.
    pub fn name(self) -> &'static str {
        match self {
            Scenario::NotDecreasing => "notDecreasing",
            Scenario::NotGrowing => "notGrowing",
            Scenario::Random => "random",
            Scenario::Definitive75 => "_75perInDefinitivePosition",
            Scenario::Definitive50 => "_50perInDefinitivePosition",
            Scenario::Definitive25 => "_25perInDefinitivePosition",
        }
    }

    /// Applies the transform to an already-ascending window.
    pub fn transform(self, v: &mut [i64]) {
        match self {
            Scenario::NotDecreasing => not_decreasing(v),
            Scenario::NotGrowing => not_growing(v),
            Scenario::Random => random(v),
            Scenario::Definitive75 => swap_adjacent_prefix(v, 0.25),
            Scenario::Definitive50 => swap_adjacent_prefix(v, 0.50),
            Scenario::Definitive25 => swap_adjacent_prefix(v, 0.75),
        }
    }
}

/// The canonical pass: force ascending order with full bubble-style passes.
///
///     .:
///   .:::
/// .:::::
pub fn make_ascending(v: &mut [i64]) {
    let len = v.len();

    for i in 0..len {
        for j in 0..(len - i - 1) {
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
            }
        }
    }
}

/// Identity on an already-ascending window.
pub fn not_decreasing(_v: &mut [i64]) {}

/// Full descending reversal, same bubble-style pass with the comparison
/// inverted.
///
/// :.
/// :::.
/// :::::.
pub fn not_growing(v: &mut [i64]) {
    let len = v.len();

    for i in 0..len {
        for j in 0..(len - i - 1) {
            if v[j] < v[j + 1] {
                v.swap(j, j + 1);
            }
        }
    }
}

/// Uniform random permutation (Fisher-Yates).
///
///     .
/// : . : :
/// :.:::.::
pub fn random(v: &mut [i64]) {
    let mut rng = new_seeded_rng();
    v.shuffle(&mut rng);
}

/// Swaps the adjacent pair at `i` and `i + 1` for `i = 0, 2, 4, ...` while
/// `i <= fraction * len`, bound inclusive and real-valued. Larger fractions
/// disturb more of the prefix, so the scenario names carry the complement of
/// the swapped share.
pub fn swap_adjacent_prefix(v: &mut [i64], fraction: f64) {
    let bound = fraction * v.len() as f64;

    let mut i = 0usize;
    while i as f64 <= bound {
        if i + 1 >= v.len() {
            break;
        }
        v.swap(i, i + 1);
        i += 2;
    }
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Makes every call to the random scenario draw a fresh seed instead of the
/// cached per-process one.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// The shuffle seed. Random per process so runs are not reproducible across
/// invocations, but cached and printable so a crashing input can be rebuilt.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| thread_rng().gen())
    } else {
        thread_rng().gen()
    }
}

fn new_seeded_rng() -> StdRng {
    rand::SeedableRng::seed_from_u64(random_init_seed())
}
