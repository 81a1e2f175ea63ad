use crate::state::toast::{use_toasts, Toast, ToastKind};
use leptos::*;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "bg-status-success-bg border-status-success-border text-status-success-text",
        ToastKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
    }
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let store = use_toasts();
    let toasts = store.toasts();
    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("border px-4 py-3 rounded shadow cursor-pointer {}", toast_class(toast.kind))
                            role="status"
                            data-toast=id
                            on:click=move |_| store.dismiss(id)
                        >
                            <p class="text-sm">{toast.message}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
