//! Simulation observer trait for progress reporting and data collection.

use hw_core::Step;
use hw_road::Road;

use crate::{StepSummary, TransitLog, TransitRecord};

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run] at key
/// points in the step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers get read-only access; they
/// cannot influence the run.
///
/// # Example: exit counter
///
/// ```rust,ignore
/// struct ExitCounter(usize);
///
/// impl SimObserver for ExitCounter {
///     fn on_exit(&mut self, _record: &TransitRecord) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any vehicle moves.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called once per vehicle that left the highway during the step, in
    /// exit order, after the step completes.
    fn on_exit(&mut self, _record: &TransitRecord) {}

    /// Called at the end of each step with the road as the step left it.
    fn on_step_end(&mut self, _summary: &StepSummary, _road: &Road) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_step: Step, _log: &TransitLog) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Fan out every callback to two observers, first `A` then `B`.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_step_start(&mut self, step: Step) {
        self.0.on_step_start(step);
        self.1.on_step_start(step);
    }

    fn on_exit(&mut self, record: &TransitRecord) {
        self.0.on_exit(record);
        self.1.on_exit(record);
    }

    fn on_step_end(&mut self, summary: &StepSummary, road: &Road) {
        self.0.on_step_end(summary, road);
        self.1.on_step_end(summary, road);
    }

    fn on_sim_end(&mut self, final_step: Step, log: &TransitLog) {
        self.0.on_sim_end(final_step, log);
        self.1.on_sim_end(final_step, log);
    }
}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_step_start(&mut self, step: Step) {
        (**self).on_step_start(step);
    }

    fn on_exit(&mut self, record: &TransitRecord) {
        (**self).on_exit(record);
    }

    fn on_step_end(&mut self, summary: &StepSummary, road: &Road) {
        (**self).on_step_end(summary, road);
    }

    fn on_sim_end(&mut self, final_step: Step, log: &TransitLog) {
        (**self).on_sim_end(final_step, log);
    }
}

/// An observer that may be switched off at runtime.
impl<O: SimObserver> SimObserver for Option<O> {
    fn on_step_start(&mut self, step: Step) {
        if let Some(o) = self {
            o.on_step_start(step);
        }
    }

    fn on_exit(&mut self, record: &TransitRecord) {
        if let Some(o) = self {
            o.on_exit(record);
        }
    }

    fn on_step_end(&mut self, summary: &StepSummary, road: &Road) {
        if let Some(o) = self {
            o.on_step_end(summary, road);
        }
    }

    fn on_sim_end(&mut self, final_step: Step, log: &TransitLog) {
        if let Some(o) = self {
            o.on_sim_end(final_step, log);
        }
    }
}
