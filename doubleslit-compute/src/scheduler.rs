//! Render invalidation and coalescing.
//!
//! Parameter and viewport changes arrive from the UI at arbitrary times. The
//! scheduler keeps only the latest of each, and hands out at most one render
//! job at a time. Every input change bumps a generation counter; a job whose
//! generation is no longer current when it finishes is stale and its frame
//! is dropped, so the display never shows a frame computed from superseded
//! inputs.

use crate::cancellation::CancellationChecker;
use doubleslit_core::{OpticalParameters, ViewportSize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Rendering,
}

/// Snapshot of the inputs for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderJob {
    pub generation: u64,
    pub params: OpticalParameters,
    pub size: ViewportSize,
}

/// What to do with a finished job's frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Inputs unchanged since the job started: show the frame.
    Commit,
    /// Inputs changed meanwhile: discard the frame; another job is pending.
    Stale,
}

#[derive(Clone, Debug)]
pub struct RenderScheduler {
    params: Option<OpticalParameters>,
    size: Option<ViewportSize>,
    generation: u64,
    /// Generation of the last frame handed out as a job.
    rendered_generation: Option<u64>,
    state: SchedulerState,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self {
            params: None,
            size: None,
            generation: 0,
            rendered_generation: None,
            state: SchedulerState::Idle,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True when inputs are complete and not yet rendered.
    pub fn is_dirty(&self) -> bool {
        self.params.is_some()
            && self.size.is_some()
            && self.rendered_generation != Some(self.generation)
    }

    /// Record new parameters. Returns true if they differ from the last ones.
    pub fn update_parameters(&mut self, params: OpticalParameters) -> bool {
        if self.params == Some(params) {
            return false;
        }
        self.params = Some(params);
        self.generation += 1;
        true
    }

    /// Record a new viewport size. Returns true if it differs from the last one.
    pub fn update_size(&mut self, size: ViewportSize) -> bool {
        if self.size == Some(size) {
            return false;
        }
        self.size = Some(size);
        self.generation += 1;
        true
    }

    /// Force a re-render of the current inputs (e.g. a render setting changed).
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Take the next job if idle and dirty. All updates since the last job
    /// collapse into this one.
    pub fn next_job(&mut self) -> Option<RenderJob> {
        if self.state == SchedulerState::Rendering || !self.is_dirty() {
            return None;
        }
        let job = RenderJob {
            generation: self.generation,
            params: self.params?,
            size: self.size?,
        };
        self.rendered_generation = Some(job.generation);
        self.state = SchedulerState::Rendering;
        Some(job)
    }

    pub fn is_current(&self, job: &RenderJob) -> bool {
        job.generation == self.generation
    }

    /// Finish `job` and decide whether its frame may be shown.
    pub fn complete(&mut self, job: &RenderJob) -> Completion {
        self.state = SchedulerState::Idle;
        if self.is_current(job) {
            Completion::Commit
        } else {
            log::debug!(
                "Dropping stale frame (generation {} < {})",
                job.generation,
                self.generation
            );
            Completion::Stale
        }
    }

    /// Abandon `job` without a frame (e.g. cancelled mid-render).
    pub fn abort(&mut self, job: &RenderJob) {
        self.state = SchedulerState::Idle;
        if self.rendered_generation == Some(job.generation) {
            self.rendered_generation = None;
        }
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Cancels a render once the scheduler has moved past the job's generation.
pub struct JobCancellation<'a> {
    scheduler: &'a RenderScheduler,
    job: RenderJob,
}

impl<'a> JobCancellation<'a> {
    pub fn new(scheduler: &'a RenderScheduler, job: RenderJob) -> Self {
        Self { scheduler, job }
    }
}

impl CancellationChecker for JobCancellation<'_> {
    fn is_cancelled(&self) -> bool {
        !self.scheduler.is_current(&self.job)
    }
}
