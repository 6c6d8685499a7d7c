use std::{
    error::Error,
    fmt,
    path::{Path, PathBuf},
    thread,
    time::{Duration, Instant},
};

use graphsearch_core::{
    Algorithm, Graph, ParseError, SearchError, SearchObserver, SearchResult, StepEvent, load_graph,
};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::memory::{MemoryProbe, MemoryUsage};
use crate::steps::StepPrinter;

/// Settings for one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Print every step event.
    pub show_steps: bool,
    /// Pause after every step event.
    pub step_delay: Duration,
    /// Cancel after this many expansions.
    pub max_steps: Option<usize>,
    /// Send the step trace to stderr instead of stdout.
    pub steps_to_stderr: bool,
}

impl RunConfig {
    pub fn new(show_steps: bool, step_delay: Duration, max_steps: Option<usize>) -> Self {
        Self {
            show_steps,
            step_delay,
            max_steps,
            steps_to_stderr: false,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(false, Duration::ZERO, None)
    }
}

impl From<&Args> for RunConfig {
    fn from(args: &Args) -> Self {
        Self {
            steps_to_stderr: args.json,
            ..Self::new(
                args.steps,
                Duration::from_millis(args.delay_ms),
                args.max_steps,
            )
        }
    }
}

/// Failures surfaced to the user, split by exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Bad invocation, e.g. an unknown method.
    Usage(String),
    /// Unreadable or invalid graph data.
    Data(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Data(_) => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(message) | CliError::Data(message) => f.write_str(message),
        }
    }
}

impl Error for CliError {}

impl From<SearchError> for CliError {
    fn from(error: SearchError) -> Self {
        match error {
            SearchError::UnknownAlgorithm(_) => CliError::Usage(error.to_string()),
            SearchError::MissingCoordinates(_) | SearchError::Cancelled { .. } => {
                CliError::Data(error.to_string())
            }
        }
    }
}

impl From<ParseError> for CliError {
    fn from(error: ParseError) -> Self {
        CliError::Data(error.to_string())
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(SearchResult),
    /// `--max-steps` was reached before the search finished.
    Stopped {
        nodes_generated: usize,
        expansions: usize,
    },
}

impl Outcome {
    pub fn nodes_generated(&self) -> usize {
        match self {
            Outcome::Completed(result) => result.nodes_generated,
            Outcome::Stopped {
                nodes_generated, ..
            } => *nodes_generated,
        }
    }

    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            Outcome::Completed(result) => Some(result),
            Outcome::Stopped { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub outcome: Outcome,
    pub path_cost: Option<u64>,
    pub elapsed: Duration,
    pub memory: MemoryUsage,
}

impl RunReport {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Observer attached to every CLI run: samples the heap, prints and paces
/// steps, and enforces the expansion limit.
struct RunObserver<'c> {
    probe: MemoryProbe,
    printer: Option<StepPrinter<'c>>,
    delay: Duration,
    max_steps: Option<usize>,
    expansions: usize,
}

impl SearchObserver for RunObserver<'_> {
    fn on_step(&mut self, event: &StepEvent<'_>) {
        self.probe.sample();
        if matches!(event, StepEvent::Expansion(_)) {
            self.expansions += 1;
        }
        if let Some(printer) = self.printer.as_mut() {
            printer.print(event);
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn should_stop(&self) -> bool {
        self.max_steps.is_some_and(|limit| self.expansions >= limit)
    }
}

pub struct GraphSearchApp {
    pub graph_path: PathBuf,
    pub graph: Graph,
}

impl GraphSearchApp {
    pub fn load(graph_path: &Path) -> Result<Self, CliError> {
        let graph = load_graph(graph_path)?;
        Ok(Self {
            graph_path: graph_path.to_path_buf(),
            graph,
        })
    }

    pub fn from_graph(graph_path: PathBuf, graph: Graph) -> Self {
        Self { graph_path, graph }
    }

    pub fn run(
        &self,
        algorithm: Algorithm,
        config: &RunConfig,
        colors: &ColorScheme,
    ) -> Result<RunReport, CliError> {
        let mut observer = RunObserver {
            probe: MemoryProbe::start(),
            printer: config
                .show_steps
                .then(|| StepPrinter::new(colors, config.steps_to_stderr)),
            delay: config.step_delay,
            max_steps: config.max_steps,
            expansions: 0,
        };

        let start_time = Instant::now();
        let strategy = algorithm.build(&self.graph)?;
        let outcome = match strategy.search_with(Some(&mut observer)) {
            Ok(result) => Outcome::Completed(result),
            Err(SearchError::Cancelled { nodes_generated }) => Outcome::Stopped {
                nodes_generated,
                expansions: observer.expansions,
            },
            Err(error) => return Err(error.into()),
        };
        let elapsed = start_time.elapsed();
        drop(strategy);

        let memory = observer.probe.finish();
        let path_cost = outcome
            .result()
            .and_then(|result| result.path_cost(&self.graph));

        tracing::debug!(
            method = algorithm.as_str(),
            nodes_generated = outcome.nodes_generated(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            peak_bytes = memory.peak_bytes,
            "run finished"
        );

        Ok(RunReport {
            algorithm,
            outcome,
            path_cost,
            elapsed,
            memory,
        })
    }

    /// Every method in registry order. A failing method does not stop the
    /// others.
    pub fn run_all(
        &self,
        config: &RunConfig,
        colors: &ColorScheme,
    ) -> Vec<(Algorithm, Result<RunReport, CliError>)> {
        Algorithm::ALL
            .into_iter()
            .map(|algorithm| (algorithm, self.run(algorithm, config, colors)))
            .collect()
    }
}

/// Resolves the method argument; no argument means the default method.
pub fn resolve_method(method: Option<&str>) -> Result<Algorithm, CliError> {
    match method {
        Some(name) => Ok(name.parse::<Algorithm>()?),
        None => Ok(Algorithm::default()),
    }
}
