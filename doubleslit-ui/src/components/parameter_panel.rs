//! Side panel: parameter sliders, display options and the info readout.

use crate::components::ParameterSlider;
use doubleslit_compute::fringe_spacing_mm;
use doubleslit_core::{wavelength_to_tint, OpticalParameters, ParameterRange};
use leptos::*;

const WAVELENGTH_HELP: &str =
    "The distance between consecutive crests of a wave. Determines the color of light.";
const SEPARATION_HELP: &str = "The distance between the two point sources of light.";
const DISTANCE_HELP: &str = "The distance from the light sources to the observation screen.";

#[component]
pub fn ParameterPanel(
    params: Signal<OpticalParameters>,
    on_change: Callback<OpticalParameters>,
    inverse_square: Signal<bool>,
    on_inverse_square_change: Callback<bool>,
    render_time_ms: Signal<Option<f64>>,
) -> impl IntoView {
    let wavelength = Signal::derive(move || params.get().wavelength_nm);
    let separation = Signal::derive(move || params.get().separation_mm);
    let distance = Signal::derive(move || params.get().distance_cm);

    let swatch_style = move || {
        format!(
            "background-color: {}",
            wavelength_to_tint(wavelength.get()).to_css()
        )
    };

    view! {
        <aside class="w-72 shrink-0 p-4 space-y-5 bg-black/95 border-r border-white/10 overflow-y-auto">
            <section class="space-y-4">
                <h2 class="text-white text-sm font-medium">"Parameters"</h2>
                <ParameterSlider
                    label="Wavelength"
                    unit="nm"
                    value=wavelength
                    range=ParameterRange::WAVELENGTH_NM
                    help=WAVELENGTH_HELP
                    on_change=Callback::new(move |v| {
                        on_change.call(params.get_untracked().with_wavelength(v))
                    })
                >
                    <span
                        class="inline-block w-3 h-3 rounded-full border border-white/20"
                        style=swatch_style
                    />
                </ParameterSlider>
                <ParameterSlider
                    label="Slit separation"
                    unit="mm"
                    value=separation
                    range=ParameterRange::SEPARATION_MM
                    help=SEPARATION_HELP
                    precision=2
                    on_change=Callback::new(move |v| {
                        on_change.call(params.get_untracked().with_separation(v))
                    })
                />
                <ParameterSlider
                    label="Screen distance"
                    unit="cm"
                    value=distance
                    range=ParameterRange::DISTANCE_CM
                    help=DISTANCE_HELP
                    on_change=Callback::new(move |v| {
                        on_change.call(params.get_untracked().with_distance(v))
                    })
                />
                <button
                    class="w-full px-3 py-1.5 rounded-lg border border-white/20 text-white text-sm hover:bg-white/10 transition-colors"
                    on:click=move |_| on_change.call(OpticalParameters::default())
                >
                    "Reset to defaults"
                </button>
            </section>

            <section class="space-y-2">
                <h2 class="text-white text-sm font-medium">"Display"</h2>
                <label class="flex items-center gap-2 text-xs text-white cursor-pointer">
                    <input
                        type="checkbox"
                        class="accent-white"
                        prop:checked=move || inverse_square.get()
                        on:change=move |ev| on_inverse_square_change.call(event_target_checked(&ev))
                    />
                    "Inverse-square falloff"
                </label>
            </section>

            <section class="space-y-1 text-xs text-gray-300">
                <h2 class="text-white text-sm font-medium">"Info"</h2>
                <div class="flex justify-between">
                    <span>"Fringe spacing"</span>
                    <span class="tabular-nums">
                        {move || format!("{:.3} mm", fringe_spacing_mm(&params.get()))}
                    </span>
                </div>
                <div class="flex justify-between">
                    <span>"Render time"</span>
                    <span class="tabular-nums">
                        {move || match render_time_ms.get() {
                            Some(ms) => format!("{ms:.1} ms"),
                            None => "-".to_string(),
                        }}
                    </span>
                </div>
            </section>
        </aside>
    }
}
