pub mod cancellation;
pub mod field;
pub mod frame_renderer;
pub mod render_config;
pub mod scheduler;

pub use cancellation::{CancellationChecker, NeverCancel};
pub use field::{field_intensity, fringe_spacing_mm, FieldGeometry, RadialFalloff};
pub use frame_renderer::{FramePlan, FrameRenderer, RenderOutcome};
pub use render_config::RenderConfig;
pub use scheduler::{Completion, JobCancellation, RenderJob, RenderScheduler, SchedulerState};

// Re-export core types for convenience
pub use doubleslit_core::*;
