//! Reusable slider component for optical parameters.

use doubleslit_core::ParameterRange;
use leptos::*;

/// Slider with label, value display and unit for one parameter.
#[component]
pub fn ParameterSlider(
    /// Label text displayed on the left
    label: &'static str,
    /// Unit appended to the value display
    unit: &'static str,
    /// Current value signal
    value: Signal<f64>,
    /// Called with the new value, already clamped into `range`
    on_change: Callback<f64>,
    range: ParameterRange,
    /// Explanation shown as a tooltip on the label
    #[prop(optional)]
    help: Option<&'static str>,
    /// Decimal places for value display
    #[prop(default = 0)]
    precision: u8,
    /// Optional adornment rendered after the label (e.g. a colour swatch)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <div class="flex items-center justify-between text-xs text-white">
                <div class="flex items-center gap-2">
                    <span
                        class=move || if help.is_some() { "cursor-help underline decoration-dotted" } else { "" }
                        title=help
                    >
                        {label}
                    </span>
                    {children.map(|c| c())}
                </div>
                <span class="tabular-nums text-gray-300">
                    {move || format!("{:.prec$} {}", value.get(), unit, prec = precision as usize)}
                </span>
            </div>
            <input
                type="range"
                class="w-full accent-white"
                prop:min=range.min
                prop:max=range.max
                prop:step=range.step
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                        on_change.call(range.clamp(v));
                    }
                }
            />
        </div>
    }
}
