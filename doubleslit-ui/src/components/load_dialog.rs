//! Modal listing saved configurations.

use crate::components::ConfirmDialog;
use doubleslit_core::SavedConfiguration;
use leptos::*;

/// Clicking an entry applies it; the trash button asks before deleting.
#[component]
pub fn LoadDialog(
    #[prop(into)]
    visible: Signal<bool>,
    configurations: Signal<Vec<SavedConfiguration>>,
    on_close: Callback<()>,
    on_select: Callback<SavedConfiguration>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let pending_delete = create_rw_signal(None::<SavedConfiguration>);

    let confirm_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|c| format!("Delete \"{}\"? This cannot be undone.", c.name))
            .unwrap_or_default()
    });

    view! {
        <Show when=move || visible.get()>
            <div
                class="fixed inset-0 z-[90] bg-black/50 backdrop-blur-sm flex items-center justify-center"
                on:click=move |_| on_close.call(())
            >
                <div
                    class="bg-black/95 border border-white/10 rounded-lg p-4 w-96 max-h-[70vh] mx-4 flex flex-col gap-4"
                    on:click=|e| e.stop_propagation()
                >
                    <div class="flex items-center justify-between">
                        <h3 class="text-white text-sm font-medium">"Load configuration"</h3>
                        <button
                            class="text-gray-400 hover:text-white text-sm"
                            on:click=move |_| on_close.call(())
                        >
                            "✕"
                        </button>
                    </div>
                    <Show
                        when=move || !configurations.get().is_empty()
                        fallback=|| view! {
                            <p class="text-gray-400 text-sm text-center py-6">
                                "No saved configurations yet."
                            </p>
                        }
                    >
                        <ul class="overflow-y-auto space-y-1">
                            <For
                                each=move || configurations.get()
                                key=|c| c.id
                                children=move |config| {
                                    let for_select = config.clone();
                                    let for_delete = config.clone();
                                    view! {
                                        <li class="flex items-center gap-2 rounded-lg hover:bg-white/10 transition-colors">
                                            <button
                                                class="flex-1 text-left px-3 py-2"
                                                on:click=move |_| on_select.call(for_select.clone())
                                            >
                                                <div class="text-white text-sm">{config.name.clone()}</div>
                                                <div class="text-gray-400 text-xs">{config.summary()}</div>
                                            </button>
                                            <button
                                                class="px-3 py-2 text-gray-400 hover:text-red-400 text-sm"
                                                title="Delete"
                                                on:click=move |_| pending_delete.set(Some(for_delete.clone()))
                                            >
                                                "🗑"
                                            </button>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </div>
            </div>
        </Show>
        <ConfirmDialog
            visible=Signal::derive(move || pending_delete.get().is_some())
            title="Delete configuration"
            message=confirm_message
            cancel_label="Cancel"
            confirm_label="Delete"
            on_cancel=Callback::new(move |_| pending_delete.set(None))
            on_confirm=Callback::new(move |_| {
                if let Some(config) = pending_delete.get_untracked() {
                    on_delete.call(config.id);
                }
                pending_delete.set(None);
            })
        />
    }
}
