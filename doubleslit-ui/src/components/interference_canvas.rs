use crate::config::render_config;
use crate::rendering::FramePresenter;
use doubleslit_core::{OpticalParameters, ViewportSize};
use leptos::*;
use leptos_use::use_element_size;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// Canvas that fills its container and shows the interference pattern for
/// `params`. Re-renders on parameter, size or display-option changes.
#[component]
pub fn InterferenceCanvas(
    params: Signal<OpticalParameters>,
    inverse_square: Signal<bool>,
    /// Receives the duration of every committed render
    set_render_time_ms: WriteSignal<Option<f64>>,
) -> impl IntoView {
    let container_ref = create_node_ref::<html::Div>();
    let canvas_ref = create_node_ref::<html::Canvas>();

    let container_size = use_element_size(container_ref);

    let initial = params.get_untracked();
    let presenter = store_value(FramePresenter::new(
        render_config(inverse_square.get_untracked(), initial.distance_mm()),
        move |ms| set_render_time_ms.set(Some(ms)),
    ));

    // Effect: canvas mounted
    create_effect(move |_| {
        let Some(canvas_el) = canvas_ref.get() else {
            return;
        };
        let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>().clone();
        presenter.with_value(|p| p.attach(canvas));
    });

    // Effect: container resized
    create_effect(move |_| {
        let size = ViewportSize::new(
            container_size.width.get().floor() as u32,
            container_size.height.get().floor() as u32,
        );
        presenter.with_value(|p| p.update_size(size));
    });

    // Effect: parameters changed
    create_effect(move |_| {
        let p = params.get();
        presenter.with_value(|presenter| presenter.update_parameters(p));
    });

    // Effect: display options changed (falloff is referenced to the screen distance)
    create_effect(move |_| {
        let config = render_config(inverse_square.get(), params.get().distance_mm());
        presenter.with_value(|p| p.set_config(config));
    });

    view! {
        <div node_ref=container_ref class="relative flex-1 min-w-0 min-h-0 bg-black">
            <canvas node_ref=canvas_ref class="absolute inset-0 block w-full h-full" />
        </div>
    }
}
