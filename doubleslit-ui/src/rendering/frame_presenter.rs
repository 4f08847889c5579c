//! Drives the frame renderer from UI changes.
//!
//! Parameter and size updates only touch the scheduler and request one
//! animation frame; bursts of slider input between two frames collapse into
//! a single render of the newest inputs. Frames are rendered into a back
//! buffer that is swapped to the front and blitted only when the scheduler
//! confirms the inputs did not change in the meantime.

use crate::rendering::canvas_utils::{performance_now, present_frame};
use doubleslit_compute::{
    Completion, FrameRenderer, OpticalParameters, PixelBuffer, RenderConfig, RenderJob,
    RenderScheduler, ViewportSize,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlCanvasElement;

struct PresenterState {
    scheduler: RenderScheduler,
    renderer: FrameRenderer,
    back: PixelBuffer,
    front: PixelBuffer,
    canvas: Option<HtmlCanvasElement>,
    frame_requested: bool,
}

/// Cheap-to-clone handle shared by the canvas component's effects.
#[derive(Clone)]
pub struct FramePresenter {
    state: Rc<RefCell<PresenterState>>,
    on_frame: Rc<dyn Fn(f64)>,
}

impl FramePresenter {
    /// `on_frame` receives the render time in ms of every committed frame.
    pub fn new(config: RenderConfig, on_frame: impl Fn(f64) + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(PresenterState {
                scheduler: RenderScheduler::new(),
                renderer: FrameRenderer::new(config),
                back: PixelBuffer::default(),
                front: PixelBuffer::default(),
                canvas: None,
                frame_requested: false,
            })),
            on_frame: Rc::new(on_frame),
        }
    }

    pub fn attach(&self, canvas: HtmlCanvasElement) {
        self.state.borrow_mut().canvas = Some(canvas);
        self.state.borrow_mut().scheduler.invalidate();
        self.request_frame();
    }

    pub fn update_parameters(&self, params: OpticalParameters) {
        if self.state.borrow_mut().scheduler.update_parameters(params) {
            self.request_frame();
        }
    }

    pub fn update_size(&self, size: ViewportSize) {
        if self.state.borrow_mut().scheduler.update_size(size) {
            self.request_frame();
        }
    }

    pub fn set_config(&self, config: RenderConfig) {
        {
            let mut state = self.state.borrow_mut();
            if *state.renderer.config() == config {
                return;
            }
            state.renderer.set_config(config);
            state.scheduler.invalidate();
        }
        self.request_frame();
    }

    fn request_frame(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.frame_requested {
                return;
            }
            state.frame_requested = true;
        }
        let presenter = self.clone();
        leptos::request_animation_frame(move || presenter.run_frame());
    }

    fn run_frame(&self) {
        let committed = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            state.frame_requested = false;

            let Some(canvas) = state.canvas.clone() else {
                return;
            };

            let start = performance_now();
            let job = render_pending(
                &mut state.scheduler,
                &state.renderer,
                &mut state.back,
                &mut state.front,
            );
            let committed = job.map(|job| {
                let elapsed = performance_now() - start;
                log::debug!(
                    "Rendered {}x{} frame in {:.1} ms (λ={} nm)",
                    job.size.width,
                    job.size.height,
                    elapsed,
                    job.params.wavelength_nm
                );
                elapsed
            });

            if committed.is_some() {
                if let Err(e) = present_frame(&canvas, &state.front) {
                    log::warn!("Failed to draw frame: {:?}", e);
                }
            }
            committed
        };

        if let Some(elapsed) = committed {
            (self.on_frame)(elapsed);
        }
    }
}

/// Render every pending job into `back`, swapping each committed frame to
/// `front`. Returns the last committed job, if any.
///
/// A pass runs to completion inside one animation frame, so no input can
/// change under it; the scheduler still decides whether the result is current.
fn render_pending(
    scheduler: &mut RenderScheduler,
    renderer: &FrameRenderer,
    back: &mut PixelBuffer,
    front: &mut PixelBuffer,
) -> Option<RenderJob> {
    let mut committed = None;
    while let Some(job) = scheduler.next_job() {
        renderer.render_into(&job.params, job.size, back);
        match scheduler.complete(&job) {
            Completion::Commit => {
                front.swap(back);
                committed = Some(job);
            }
            Completion::Stale => continue,
        }
    }
    committed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler_with(params: OpticalParameters, size: ViewportSize) -> RenderScheduler {
        let mut scheduler = RenderScheduler::new();
        scheduler.update_parameters(params);
        scheduler.update_size(size);
        scheduler
    }

    #[test]
    fn pending_job_is_rendered_and_swapped_to_front() {
        let params = OpticalParameters::default();
        let size = ViewportSize::new(40, 30);
        let mut scheduler = scheduler_with(params, size);
        let renderer = FrameRenderer::default();
        let (mut back, mut front) = (PixelBuffer::default(), PixelBuffer::default());

        let job = render_pending(&mut scheduler, &renderer, &mut back, &mut front).unwrap();

        assert_eq!(job.params, params);
        assert_eq!(front, renderer.render(&params, size));
        assert!(!scheduler.is_dirty());
    }

    #[test]
    fn nothing_to_render_leaves_front_untouched() {
        let mut scheduler = scheduler_with(OpticalParameters::default(), ViewportSize::new(8, 8));
        let renderer = FrameRenderer::default();
        let (mut back, mut front) = (PixelBuffer::default(), PixelBuffer::default());
        render_pending(&mut scheduler, &renderer, &mut back, &mut front);
        let shown = front.clone();

        assert!(render_pending(&mut scheduler, &renderer, &mut back, &mut front).is_none());
        assert_eq!(front, shown);
    }

    #[test]
    fn burst_of_updates_renders_only_latest_inputs() {
        let size = ViewportSize::new(16, 16);
        let mut scheduler = scheduler_with(OpticalParameters::default(), size);
        for wavelength in [450.0, 520.0, 610.0] {
            scheduler.update_parameters(OpticalParameters::default().with_wavelength(wavelength));
        }
        let renderer = FrameRenderer::default();
        let (mut back, mut front) = (PixelBuffer::default(), PixelBuffer::default());

        let job = render_pending(&mut scheduler, &renderer, &mut back, &mut front).unwrap();

        assert_eq!(job.params.wavelength_nm, 610.0);
        assert_eq!(front, renderer.render(&job.params, size));
    }
}
