/// Trait for checking whether an in-progress frame should be abandoned
pub trait CancellationChecker {
    /// Returns true if the render should stop
    fn is_cancelled(&self) -> bool;
}

/// Never cancels - for synchronous full-frame renders
#[derive(Clone, Copy, Default)]
pub struct NeverCancel;

impl CancellationChecker for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}
