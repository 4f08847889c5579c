//! Toast notification component for transient feedback.

use leptos::*;

const TOAST_DURATION_MS: u64 = 2000;

/// Severity decides the toast's accent colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

/// Toast notification that appears briefly then fades out.
#[component]
pub fn Toast(
    /// Message to display (None = hidden)
    message: Signal<Option<ToastMessage>>,
) -> impl IntoView {
    let (is_visible, set_is_visible) = create_signal(false);
    let (display, set_display) = create_signal(None::<ToastMessage>);
    // Only the newest toast's timer may hide it.
    let shown = store_value(0u32);

    create_effect(move |_| {
        if let Some(msg) = message.get() {
            set_display.set(Some(msg));
            set_is_visible.set(true);

            shown.update_value(|n| *n = n.wrapping_add(1));
            let ticket = shown.get_value();
            set_timeout(
                move || {
                    if shown.get_value() == ticket {
                        set_is_visible.set(false);
                    }
                },
                std::time::Duration::from_millis(TOAST_DURATION_MS),
            );
        }
    });

    let accent = move || match display.get().map(|m| m.kind) {
        Some(ToastKind::Error) => "border-red-500/60",
        _ => "border-white/20",
    };

    view! {
        <div
            class=move || format!(
                "fixed bottom-12 left-1/2 -translate-x-1/2 z-50 \
                 px-4 py-2 rounded-lg border {} \
                 bg-black/80 text-white text-sm font-medium \
                 transition-opacity duration-300 \
                 pointer-events-none {}",
                accent(),
                if is_visible.get() { "opacity-100" } else { "opacity-0" }
            )
        >
            {move || display.get().map(|m| m.text).unwrap_or_default()}
        </div>
    }
}
