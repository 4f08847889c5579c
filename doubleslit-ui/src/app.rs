use crate::components::{InterferenceCanvas, LoadDialog, ParameterPanel, SaveDialog, Toast, ToastMessage};
use crate::config::{get_inverse_square_enabled, set_inverse_square_enabled};
use crate::hooks::{
    load_state, save_state, use_configurations, use_hashchange_listener, PersistedState,
};
use doubleslit_core::{NewConfiguration, OpticalParameters, SavedConfiguration, StoreError};
use leptos::*;
use leptos_use::signal_debounced;

const SAVE_DEBOUNCE_MS: f64 = 500.0;

#[component]
pub fn App() -> impl IntoView {
    // ========== Load state: URL hash > localStorage > defaults ==========
    let initial_params = load_state().map(|s| s.params).unwrap_or_default();
    let (params, set_params) = create_signal(initial_params);

    let (inverse_square, set_inverse_square) = create_signal(get_inverse_square_enabled());
    let (render_time_ms, set_render_time_ms) = create_signal(None::<f64>);

    // ========== Effect: Parameters changed (save debounced) ==========
    let settled_params = signal_debounced(params, SAVE_DEBOUNCE_MS);
    create_effect(move |_| {
        save_state(&PersistedState::new(settled_params.get()));
    });

    // A pasted link replaces the current parameters.
    use_hashchange_listener(move |state| set_params.set(state.params));

    // ========== Saved configurations ==========
    let configurations = use_configurations();
    let (toast, set_toast) = create_signal(None::<ToastMessage>);

    let (save_open, set_save_open) = create_signal(false);
    let (save_error, set_save_error) = create_signal(None::<String>);
    let (load_open, set_load_open) = create_signal(false);

    let on_save = move |name: String| {
        let payload = NewConfiguration::from_parameters(name, &params.get_untracked());
        match configurations.create(payload) {
            Ok(saved) => {
                set_save_open.set(false);
                set_save_error.set(None);
                set_toast.set(Some(ToastMessage::success(format!(
                    "Configuration Saved: {}",
                    saved.name
                ))));
            }
            Err(StoreError::Validation { message, .. }) => set_save_error.set(Some(message)),
            Err(e) => set_toast.set(Some(ToastMessage::error(e.to_string()))),
        }
    };

    let on_select = move |config: SavedConfiguration| {
        set_params.set(config.parameters());
        set_load_open.set(false);
    };

    let on_delete = move |id: u32| match configurations.delete(id) {
        Ok(()) => set_toast.set(Some(ToastMessage::success("Deleted"))),
        Err(e) => set_toast.set(Some(ToastMessage::error(e.to_string()))),
    };

    let on_params_change = move |p: OpticalParameters| {
        if let Err(e) = p.validate() {
            log::warn!("Ignoring parameter change: {}", e);
            return;
        }
        set_params.set(p);
    };

    let on_inverse_square_change = move |enabled: bool| {
        set_inverse_square_enabled(enabled);
        set_inverse_square.set(enabled);
    };

    let header_button = "px-3 py-1.5 rounded-lg border border-white/20 text-white text-sm hover:bg-white/10 transition-colors";

    view! {
        <div class="flex flex-col w-screen h-screen overflow-hidden bg-black">
            <header class="flex items-center justify-between px-4 py-2 bg-black/95 border-b border-white/10">
                <h1 class="text-white text-sm font-medium">"Double-Slit Interference"</h1>
                <div class="flex gap-2">
                    <button
                        class=header_button
                        on:click=move |_| {
                            configurations.refresh();
                            set_load_open.set(true);
                        }
                    >
                        "Load"
                    </button>
                    <button
                        class=header_button
                        on:click=move |_| {
                            set_save_error.set(None);
                            set_save_open.set(true);
                        }
                    >
                        "Save"
                    </button>
                </div>
            </header>
            <div class="flex flex-1 min-h-0">
                <ParameterPanel
                    params=params.into()
                    on_change=Callback::new(on_params_change)
                    inverse_square=inverse_square.into()
                    on_inverse_square_change=Callback::new(on_inverse_square_change)
                    render_time_ms=render_time_ms.into()
                />
                <InterferenceCanvas
                    params=params.into()
                    inverse_square=inverse_square.into()
                    set_render_time_ms=set_render_time_ms
                />
            </div>
            <SaveDialog
                visible=save_open
                params=params.into()
                error=save_error.into()
                on_cancel=Callback::new(move |_| set_save_open.set(false))
                on_save=Callback::new(on_save)
            />
            <LoadDialog
                visible=load_open
                configurations=configurations.items.into()
                on_close=Callback::new(move |_| set_load_open.set(false))
                on_select=Callback::new(on_select)
                on_delete=Callback::new(on_delete)
            />
            <Toast message=toast.into() />
        </div>
    }
}
