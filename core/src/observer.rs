//! Step instrumentation.
//!
//! Every algorithm reports its progress to an optional [`SearchObserver`]
//! through one event type, so a watcher can replay a search step by step
//! without knowing which algorithm produced it. Observers are called
//! synchronously on the searching thread; the search makes no progress until
//! the call returns, so any pacing belongs in the observer.

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::graph::NodeId;

/// Optional measurements attached to an expansion or generation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepMetrics {
    /// Accumulated path cost from the origin.
    pub g: Option<u64>,
    /// Heuristic estimate to the nearest destination.
    pub h: Option<f64>,
    /// IDA* f-cost ceiling of the current iteration.
    pub bound: Option<f64>,
    /// IDA* generated this child but its f-cost exceeds the bound.
    pub pruned: bool,
}

/// Payload shared by expansion and generation events.
#[derive(Debug, Clone, Copy)]
pub struct StepDetail<'a> {
    /// The node being expanded.
    pub node: NodeId,
    /// The child pushed onto the frontier, for generation events.
    pub neighbor: Option<NodeId>,
    /// Path from the origin to `node`.
    pub path: &'a [NodeId],
    pub frontier: &'a Frontier,
    /// Whether the reported node (`neighbor` if present, else `node`) is a
    /// destination.
    pub is_goal: bool,
    pub metrics: StepMetrics,
}

#[derive(Debug, Clone, Copy)]
pub enum StepEvent<'a> {
    /// A node was popped and is about to be examined.
    Expansion(StepDetail<'a>),
    /// A neighbor was pushed onto the frontier or entered recursion.
    Generation(StepDetail<'a>),
    /// IDA* finished an iteration without a goal and raised its ceiling.
    BoundRaised { previous: f64, bound: f64 },
    /// IDA* is starting a fresh descent from the origin.
    Reset { iteration: usize, bound: f64 },
}

impl StepEvent<'_> {
    pub fn detail(&self) -> Option<&StepDetail<'_>> {
        match self {
            Self::Expansion(detail) | Self::Generation(detail) => Some(detail),
            Self::BoundRaised { .. } | Self::Reset { .. } => None,
        }
    }

    pub fn record(&self) -> RecordedStep {
        match self {
            Self::Expansion(detail) => RecordedStep::Expansion(RecordedDetail::from(detail)),
            Self::Generation(detail) => RecordedStep::Generation(RecordedDetail::from(detail)),
            Self::BoundRaised { previous, bound } => RecordedStep::BoundRaised {
                previous: *previous,
                bound: *bound,
            },
            Self::Reset { iteration, bound } => RecordedStep::Reset {
                iteration: *iteration,
                bound: *bound,
            },
        }
    }
}

/// Receives the event stream of a running search.
///
/// Implementations must not assume anything about algorithm internals beyond
/// what the events carry.
pub trait SearchObserver {
    fn on_step(&mut self, event: &StepEvent<'_>);

    /// Polled before every expansion. Returning `true` makes the search stop
    /// with [`SearchError::Cancelled`].
    fn should_stop(&self) -> bool {
        false
    }
}

impl<F> SearchObserver for F
where
    F: FnMut(&StepEvent<'_>),
{
    fn on_step(&mut self, event: &StepEvent<'_>) {
        self(event)
    }
}

/// Owned copy of a [`StepDetail`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDetail {
    pub node: NodeId,
    pub neighbor: Option<NodeId>,
    pub path: Vec<NodeId>,
    pub frontier: Vec<NodeId>,
    pub is_goal: bool,
    pub metrics: StepMetrics,
}

impl From<&StepDetail<'_>> for RecordedDetail {
    fn from(detail: &StepDetail<'_>) -> Self {
        Self {
            node: detail.node,
            neighbor: detail.neighbor,
            path: detail.path.to_vec(),
            frontier: detail.frontier.to_vec(),
            is_goal: detail.is_goal,
            metrics: detail.metrics,
        }
    }
}

/// Owned copy of a [`StepEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedStep {
    Expansion(RecordedDetail),
    Generation(RecordedDetail),
    BoundRaised { previous: f64, bound: f64 },
    Reset { iteration: usize, bound: f64 },
}

/// Observer that keeps every event, optionally cancelling after a number of
/// expansions.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    steps: Vec<RecordedStep>,
    expansions: usize,
    stop_after: Option<usize>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stopping_after(expansions: usize) -> Self {
        Self {
            stop_after: Some(expansions),
            ..Self::default()
        }
    }

    pub fn steps(&self) -> &[RecordedStep] {
        &self.steps
    }

    pub fn expansions(&self) -> impl Iterator<Item = &RecordedDetail> {
        self.steps.iter().filter_map(|step| match step {
            RecordedStep::Expansion(detail) => Some(detail),
            _ => None,
        })
    }

    pub fn generations(&self) -> impl Iterator<Item = &RecordedDetail> {
        self.steps.iter().filter_map(|step| match step {
            RecordedStep::Generation(detail) => Some(detail),
            _ => None,
        })
    }

    /// Ceiling of every IDA* iteration, in order.
    pub fn bounds(&self) -> Vec<f64> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                RecordedStep::Reset { bound, .. } => Some(*bound),
                _ => None,
            })
            .collect()
    }
}

impl SearchObserver for EventLog {
    fn on_step(&mut self, event: &StepEvent<'_>) {
        if matches!(event, StepEvent::Expansion(_)) {
            self.expansions += 1;
        }
        self.steps.push(event.record());
    }

    fn should_stop(&self) -> bool {
        self.stop_after.is_some_and(|limit| self.expansions >= limit)
    }
}

/// Per-search handle on the optional observer.
pub(crate) struct Tracer<'o> {
    observer: Option<&'o mut dyn SearchObserver>,
}

impl<'o> Tracer<'o> {
    pub(crate) fn new(observer: Option<&'o mut dyn SearchObserver>) -> Self {
        Self { observer }
    }

    /// Snapshots are only worth building when someone is listening.
    pub(crate) fn is_attached(&self) -> bool {
        self.observer.is_some()
    }

    pub(crate) fn emit(&mut self, event: StepEvent<'_>) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_step(&event);
        }
    }

    pub(crate) fn check_cancelled(&self, nodes_generated: usize) -> Result<(), SearchError> {
        match self.observer.as_deref() {
            Some(observer) if observer.should_stop() => {
                tracing::debug!(nodes_generated = nodes_generated, "observer requested stop");
                Err(SearchError::Cancelled { nodes_generated })
            }
            _ => Ok(()),
        }
    }
}
