use crate::api::Doctor;
use leptos::*;

/// Backend URL used by render tests; nothing listens there.
pub const TEST_BACKEND: &str = "http://backend.test";

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Server-renders `view` with resource loading suppressed, so pages show
/// their initial state and fire no requests.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Like [`render_to_string`] with toast and admin stores already provided.
pub fn render_with_session<F, N>(token: Option<&str>, doctors: Vec<Doctor>, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let token = token.map(str::to_string);
    render_to_string(move || {
        super::helpers::provide_admin(TEST_BACKEND, token.as_deref(), doctors);
        view()
    })
}

pub fn count_occurrences(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}
