//! Reporting helpers.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::problem::Problem;
use crate::solution::Solution;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let millis = duration.subsec_millis();

    format!("{}h {:02}m {:02}.{:03}s", hours, minutes, seconds, millis)
}

/// Write a human readable report of a solution.
pub fn save_solution<P: AsRef<Path>>(
    solution: &Solution,
    cost: f64,
    problem: &Problem,
    path: P,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Gold collection tour for instance: {}", problem.name)?;
    writeln!(file, "Total Cost: {:.3}", cost)?;
    writeln!(file, "Number of Routes: {}", solution.route_count())?;
    writeln!(file, "Number of Pickups: {}", solution.chunk_count())?;
    writeln!(file)?;

    for (i, route) in solution.routes.iter().enumerate() {
        write!(file, "Route #{}: 0", i + 1)?;
        for chunk in &route.chunks {
            write!(file, " -> {}({:.3})", chunk.node, chunk.amount)?;
        }
        writeln!(file, " -> 0")?;
        writeln!(file, "  Load: {:.3}", route.load())?;
    }

    Ok(())
}

/// Summary of a finished solve.
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    pub ils_iterations: usize,
    pub lns_iterations: usize,
    pub improvements: u32,
    pub runtime: Duration,
    pub initial_cost: f64,
    pub best_cost: f64,
    pub routes: usize,
    pub chunks: usize,
}

impl SearchStatistics {
    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        format!(
            "Search Statistics:
- ILS Iterations: {}
- LNS Iterations: {}
- Accepted Improvements: {}
- Runtime: {}
- Initial Cost: {:.3}
- Best Cost: {:.3}
- Routes: {}
- Pickups: {}",
            self.ils_iterations,
            self.lns_iterations,
            self.improvements,
            format_duration(self.runtime),
            self.initial_cost,
            self.best_cost,
            self.routes,
            self.chunks
        )
    }
}
