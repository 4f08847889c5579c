//! Modal for naming and saving the current parameters.

use doubleslit_core::OpticalParameters;
use leptos::*;

#[component]
pub fn SaveDialog(
    #[prop(into)]
    visible: Signal<bool>,
    /// Parameters that will be saved, shown for reference
    params: Signal<OpticalParameters>,
    /// Validation message from the last attempt, shown under the input
    error: Signal<Option<String>>,
    on_cancel: Callback<()>,
    /// Called with the entered name
    on_save: Callback<String>,
) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());

    // Start empty each time the dialog opens.
    create_effect(move |_| {
        if visible.get() {
            set_name.set(String::new());
        }
    });

    let submit = move || on_save.call(name.get_untracked());

    view! {
        <Show when=move || visible.get()>
            <div
                class="fixed inset-0 z-[100] bg-black/50 backdrop-blur-sm flex items-center justify-center"
                on:click=move |_| on_cancel.call(())
            >
                <div
                    class="bg-black/95 border border-white/10 rounded-lg p-4 w-80 mx-4 space-y-4"
                    on:click=|e| e.stop_propagation()
                >
                    <h3 class="text-white text-sm font-medium">"Save configuration"</h3>
                    <p class="text-gray-400 text-xs">
                        {move || {
                            let p = params.get();
                            format!(
                                "λ={} nm, d={} mm, L={} cm",
                                p.wavelength_nm, p.separation_mm, p.distance_cm
                            )
                        }}
                    </p>
                    <div class="space-y-1">
                        <input
                            type="text"
                            placeholder="Name"
                            class="w-full px-2 py-1.5 rounded bg-white/10 border border-white/20 text-white text-sm outline-none focus:border-white/40"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    submit();
                                }
                            }
                        />
                        <Show when=move || error.get().is_some()>
                            <p class="text-red-400 text-xs">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                    </div>
                    <div class="flex gap-2">
                        <button
                            class="flex-1 px-3 py-1.5 rounded-lg border border-white/20 text-white text-sm hover:bg-white/10 transition-colors"
                            on:click=move |_| on_cancel.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="flex-1 px-3 py-1.5 rounded-lg bg-white/20 text-white text-sm hover:bg-white/30 transition-colors"
                            on:click=move |_| submit()
                        >
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
