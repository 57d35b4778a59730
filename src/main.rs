//! Thin CLI around the measurement core.
//!
//! Positional arguments, all optional:
//!   sort_empirics [min_size] [max_size] [samples] [algs_mask] [scen_mask] [trials]
//!
//! Writes one `data/<scenario>.csv` per selected scenario with a
//! `size,<algo>,...` header and one row per window length, means in
//! nanoseconds with two decimals.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use sort_empirics::harness::{run, RunConfig, ScenarioReport};

fn parse_args() -> Result<RunConfig, String> {
    let mut config = RunConfig::default();
    let args = env::args().skip(1).collect::<Vec<_>>();

    let mut parse_into = |idx: usize, field: &mut usize, name: &str| -> Result<(), String> {
        if let Some(raw) = args.get(idx) {
            *field = raw
                .parse()
                .map_err(|_| format!("{name}: expected a non-negative integer, got {raw:?}"))?;
        }
        Ok(())
    };

    parse_into(0, &mut config.min_size, "min_size")?;
    parse_into(1, &mut config.max_size, "max_size")?;
    parse_into(2, &mut config.sample_count, "samples")?;

    let mut parse_mask = |idx: usize, field: &mut u32, name: &str| -> Result<(), String> {
        if let Some(raw) = args.get(idx) {
            *field = raw
                .parse()
                .map_err(|_| format!("{name}: expected a bitmask, got {raw:?}"))?;
        }
        Ok(())
    };

    parse_mask(3, &mut config.algorithm_mask, "algorithms mask")?;
    parse_mask(4, &mut config.scenario_mask, "scenarios mask")?;

    if let Some(raw) = args.get(5) {
        config.trials = raw
            .parse()
            .map_err(|_| format!("trials: expected a positive integer, got {raw:?}"))?;
    }

    Ok(config)
}

fn write_csv(out_dir: &Path, report: &ScenarioReport) -> std::io::Result<()> {
    let path = out_dir.join(format!("{}.csv", report.scenario.name()));
    let mut file = fs::File::create(&path)?;

    let mut header = String::from("size");
    for name in &report.algorithm_names {
        header.push(',');
        header.push_str(name);
    }
    writeln!(file, "{header}")?;

    for row in &report.rows {
        let mut line = row.size.to_string();
        for cell in &row.cells {
            line.push_str(&format!(",{:.2}", cell.mean_ns));
        }
        writeln!(file, "{line}")?;
    }

    println!("wrote {}", path.display());
    Ok(())
}

fn main() -> ExitCode {
    let config = match parse_args() {
        Ok(config) => config,
        Err(msg) => {
            eprintln!(
                "error: {msg}\nusage: sort_empirics [min_size] [max_size] \
                 [samples] [algs_mask] [scen_mask] [trials]"
            );
            return ExitCode::FAILURE;
        }
    };

    let reports = match run(&config) {
        Ok(reports) => reports,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let out_dir = Path::new("data");
    if let Err(err) = fs::create_dir_all(out_dir) {
        eprintln!("error: could not create {}: {err}", out_dir.display());
        return ExitCode::FAILURE;
    }

    for report in &reports {
        if let Err(err) = write_csv(out_dir, report) {
            eprintln!(
                "error: could not write csv for {}: {err}",
                report.scenario.name()
            );
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
