//! Logging sinks observing the population after each evaluation.
//!
//! Both sinks report the population's maximum, mean, and minimum fitness
//! converted to real-world terms through the conversion function they are
//! constructed with. [`ConsoleLogging`] prints each generation as it
//! happens; [`HistoryLogging`] accumulates the series and can render a
//! Chart.js line chart after the run.

use super::types::{best_of, Fitness, Logging, Population};
use std::io;

/// Max/mean/min of one generation, in converted (real-world) terms.
///
/// Each field is the conversion of the corresponding raw fitness statistic;
/// the mean uses the wrapping fitness sum divided by the population size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Converted maximum fitness (the generation's best).
    pub max: Fitness,
    /// Converted mean fitness.
    pub mean: Fitness,
    /// Converted minimum fitness (the generation's worst).
    pub min: Fitness,
}

fn stats_of<G, F: Fn(Fitness) -> Fitness>(
    population: &Population<G>,
    convert: &F,
) -> GenerationStats {
    let max = best_of(population).fitness;
    let min = population
        .iter()
        .min()
        .expect("population must not be empty")
        .fitness;
    let sum = population
        .iter()
        .fold(0u32, |acc, c| acc.wrapping_add(c.fitness));
    let mean = sum / population.len() as Fitness;

    GenerationStats {
        max: convert(max),
        mean: convert(mean),
        min: convert(min),
    }
}

/// Prints one block of statistics per generation to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleLogging<F> {
    fitness_to_result: F,
    iteration: usize,
}

impl<F: Fn(Fitness) -> Fitness> ConsoleLogging<F> {
    /// Creates a console sink using `fitness_to_result` for display values.
    pub fn new(fitness_to_result: F) -> Self {
        Self {
            fitness_to_result,
            iteration: 0,
        }
    }
}

impl<G, F: Fn(Fitness) -> Fitness> Logging<G> for ConsoleLogging<F> {
    fn log(&mut self, population: &Population<G>) {
        let stats = stats_of(population, &self.fitness_to_result);
        println!("-------------------------------------------");
        println!("Iteration: {}", self.iteration);
        println!("Population size: {}", population.len());
        println!("Max value: {}", stats.max);
        println!("Mean value: {}", stats.mean);
        println!("Min value: {}", stats.min);
        self.iteration += 1;
    }
}

/// Accumulates per-generation statistics for later inspection.
#[derive(Debug, Clone)]
pub struct HistoryLogging<F> {
    fitness_to_result: F,
    history: Vec<GenerationStats>,
}

impl<F: Fn(Fitness) -> Fitness> HistoryLogging<F> {
    /// Creates a history sink using `fitness_to_result` for stored values.
    pub fn new(fitness_to_result: F) -> Self {
        Self {
            fitness_to_result,
            history: Vec::new(),
        }
    }

    /// The recorded series, one entry per evaluation (the initial
    /// evaluation included).
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Consumes the sink, returning the recorded series.
    pub fn into_history(self) -> Vec<GenerationStats> {
        self.history
    }

    /// Renders the recorded series as an HTML page with a Chart.js line
    /// chart of the min/mean/max values per generation.
    pub fn write_chart<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "<!DOCTYPE html>")?;
        writeln!(writer, "<html><head><title>Results</title>")?;
        writeln!(
            writer,
            r#"<script src="https://cdnjs.cloudflare.com/ajax/libs/Chart.js/2.7.2/Chart.bundle.min.js"></script>"#
        )?;
        writeln!(writer, r#"</head><body><canvas id="chart"></canvas>"#)?;
        writeln!(
            writer,
            r#"<script>new Chart(document.getElementById("chart").getContext("2d"), {{"#
        )?;
        writeln!(writer, r#"type: "line", data: {{"#)?;

        write!(writer, "labels: [")?;
        for i in 0..self.history.len() {
            write!(writer, "{i},")?;
        }
        writeln!(writer, "],")?;

        let datasets: [(&str, &str, fn(&GenerationStats) -> Fitness); 3] = [
            ("Min", "blue", |s| s.min),
            ("Avg", "grey", |s| s.mean),
            ("Max", "red", |s| s.max),
        ];
        writeln!(writer, "datasets: [")?;
        for (label, color, pick) in datasets {
            write!(writer, r#"{{label: "{label}", data: ["#)?;
            for stats in &self.history {
                write!(writer, "{},", pick(stats))?;
            }
            writeln!(writer, r#"], borderColor: "{color}", fill: false}},"#)?;
        }
        writeln!(writer, "]}},")?;
        writeln!(
            writer,
            r#"options: {{scales: {{yAxes: [{{ticks: {{beginAtZero: true}}}}]}}}}}});"#
        )?;
        writeln!(writer, "</script></body></html>")?;
        Ok(())
    }
}

impl<G, F: Fn(Fitness) -> Fitness> Logging<G> for HistoryLogging<F> {
    fn log(&mut self, population: &Population<G>) {
        let stats = stats_of(population, &self.fitness_to_result);
        self.history.push(stats);
    }
}
