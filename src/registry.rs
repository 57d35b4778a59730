//! Bitmask-driven, ordered selections of algorithms and scenarios.
//!
//! Each bit is tested in declaration order and conditionally appends an
//! entry, so iteration order is declaration order, not bit-value order.
//! Positional output (CSV columns) depends on this. An all-zero mask is a
//! valid, empty selection; bits outside the enumerated range are a
//! configuration error.

use crate::error::Error;
use crate::scenarios::Scenario;
use crate::sorts::Algorithm;

#[derive(Debug, Clone)]
pub struct AlgorithmSelection {
    entries: Vec<Algorithm>,
}

impl AlgorithmSelection {
    pub fn from_mask(mask: u32) -> Result<Self, Error> {
        if mask & !Algorithm::ALL != 0 {
            return Err(Error::InvalidConfiguration(format!(
                "algorithm mask {mask} has bits outside 1..={}",
                Algorithm::ALL
            )));
        }

        let entries = Algorithm::ORDER
            .iter()
            .copied()
            .filter(|alg| mask & alg.bit() != 0)
            .collect();

        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = Algorithm> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column order for any positional output.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|alg| alg.name()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct ScenarioSelection {
    entries: Vec<Scenario>,
}

impl ScenarioSelection {
    pub fn from_mask(mask: u32) -> Result<Self, Error> {
        if mask & !Scenario::ALL != 0 {
            return Err(Error::InvalidConfiguration(format!(
                "scenario mask {mask} has bits outside 1..={}",
                Scenario::ALL
            )));
        }

        let entries = Scenario::ORDER
            .iter()
            .copied()
            .filter(|sc| mask & sc.bit() != 0)
            .collect();

        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = Scenario> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|sc| sc.name()).collect()
    }
}
