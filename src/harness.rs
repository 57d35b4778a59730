//! The measurement loop: scenario x window length x algorithm x trial.

use std::hint::black_box;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::error::Error;
use crate::generator::ScenarioGenerator;
use crate::registry::{AlgorithmSelection, ScenarioSelection};
use crate::scenarios::Scenario;
use crate::sorts::{i64_less, Algorithm};

/// One full run's options. Built once from caller input, immutable after
/// validation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub min_size: usize,
    pub max_size: usize,
    /// Number of window lengths measured between `max_size` and `min_size`.
    pub sample_count: usize,
    pub algorithm_mask: u32,
    pub scenario_mask: u32,
    /// Timed repetitions folded into each cell's mean.
    pub trials: usize,
    /// Check sortedness after each cell's trials. Off by default: the
    /// measurement path stays a pure timing tool.
    pub verify_sorted: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            min_size: 100,
            max_size: 100_000,
            sample_count: 25,
            algorithm_mask: 1,
            scenario_mask: 1,
            trials: 5,
            verify_sorted: false,
        }
    }
}

impl RunConfig {
    /// Rejects options that cannot produce a meaningful measurement matrix.
    /// Runs before any buffer is built or sink opened.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_size <= self.min_size {
            return Err(Error::InvalidConfiguration(format!(
                "max_size ({}) must exceed min_size ({})",
                self.max_size, self.min_size
            )));
        }
        if self.sample_count < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "sample_count ({}) must be at least 2",
                self.sample_count
            )));
        }
        if self.trials < 1 {
            return Err(Error::InvalidConfiguration(
                "trials must be at least 1".into(),
            ));
        }

        AlgorithmSelection::from_mask(self.algorithm_mask)?;
        ScenarioSelection::from_mask(self.scenario_mask)?;

        Ok(())
    }

    /// Distance between consecutive window lengths, real-valued. Truncated
    /// only at the point where it becomes an offset.
    pub fn sample_step(&self) -> f64 {
        (self.max_size - self.min_size) as f64 / (self.sample_count - 1) as f64
    }

    /// The window lengths the size loop will produce, largest to smallest:
    /// `max_size - floor(k * step)` for `k = 0..sample_count`. The last one
    /// is exactly `min_size`.
    pub fn window_lengths(&self) -> Vec<usize> {
        let step = self.sample_step();
        (0..self.sample_count)
            .map(|k| self.max_size - (k as f64 * step) as usize)
            .collect()
    }
}

/// Incrementally updated arithmetic mean: `m <- m + (x - m) / (n + 1)`.
/// Equals the sum-then-divide mean but never accumulates a large sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningMean {
    mean: f64,
    count: u64,
}

impl RunningMean {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, sample: f64) {
        self.mean += (sample - self.mean) / (self.count + 1) as f64;
        self.count += 1;
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Mean elapsed time for one (scenario, window length, algorithm) cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub mean_ns: f64,
}

/// One row of the per-scenario table: a window length plus one cell per
/// selected algorithm, in selection order.
#[derive(Debug, Clone)]
pub struct SizeRow {
    pub size: usize,
    pub cells: Vec<Measurement>,
}

/// All measurements for one scenario, rows largest window first.
/// `algorithm_names` is the column order actually used, for header rows.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub algorithm_names: Vec<&'static str>,
    pub rows: Vec<SizeRow>,
}

/// Runs the full measurement matrix. Purely sequential; the only I/O is a
/// one-shot stderr warning when the clock cannot resolve a trial.
pub fn run(config: &RunConfig) -> Result<Vec<ScenarioReport>, Error> {
    config.validate()?;

    let scenarios = ScenarioSelection::from_mask(config.scenario_mask)?;
    let algorithms = AlgorithmSelection::from_mask(config.algorithm_mask)?;
    let window_lengths = config.window_lengths();

    let mut reports = Vec::with_capacity(scenarios.len());

    for scenario in scenarios.iter() {
        // Fresh generator per scenario: the window only shrinks.
        let mut generator = ScenarioGenerator::new(config.max_size);
        let mut rows = Vec::with_capacity(window_lengths.len());

        for &length in &window_lengths {
            generator.shrink_to(length);
            generator.apply(scenario);

            let mut cells = Vec::with_capacity(algorithms.len());

            for algorithm in algorithms.iter() {
                let cell = measure_cell(&mut generator, algorithm, config)?;
                cells.push(cell);
            }

            rows.push(SizeRow {
                size: length,
                cells,
            });
        }

        reports.push(ScenarioReport {
            scenario,
            algorithm_names: algorithms.names(),
            rows,
        });
    }

    Ok(reports)
}

fn measure_cell(
    generator: &mut ScenarioGenerator,
    algorithm: Algorithm,
    config: &RunConfig,
) -> Result<Measurement, Error> {
    let mut mean = RunningMean::new();

    for _ in 0..config.trials {
        // Reset to the scenario image outside the timed region so every
        // trial sees identical input, not the previous trial's output.
        let input = generator.working_copy();

        let start = Instant::now();
        algorithm.run(black_box(&mut *input), i64_less)?;
        let elapsed = start.elapsed();
        black_box(&*input);

        if elapsed.is_zero() {
            warn_clock_resolution(generator.window_len());
        }

        mean.update(elapsed.as_secs_f64() * 1e9);
    }

    if config.verify_sorted {
        // The working buffer still holds the last trial's output.
        let sorted = generator.last_output().windows(2).all(|w| w[0] <= w[1]);
        if !sorted {
            return Err(Error::UnsortedOutput {
                algorithm: algorithm.name(),
                len: generator.window_len(),
            });
        }
    }

    Ok(Measurement {
        algorithm,
        mean_ns: mean.mean(),
    })
}

fn warn_clock_resolution(len: usize) {
    static WARNED: AtomicBool = AtomicBool::new(false);

    if !WARNED.swap(true, Ordering::Relaxed) {
        eprintln!(
            "warning: a trial at window length {len} measured below clock \
             resolution; means for small sizes are unreliable, raise the \
             trial count or min size"
        );
    }
}
