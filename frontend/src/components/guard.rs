use crate::{pages::login::LoginPage, state::admin::use_admin};
use leptos::*;

/// Renders `children` while an admin session exists, the login view otherwise.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let token = use_admin().token;
    let has_session = create_memo(move |_| should_render_children(token.get().as_deref()));
    view! {
        <Show when=move || has_session.get() fallback=|| view! { <LoginPage /> }>
            {children()}
        </Show>
    }
}

fn should_render_children(token: Option<&str>) -> bool {
    token.is_some_and(|token| !token.is_empty())
}
