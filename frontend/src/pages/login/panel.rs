use super::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let view_model = use_login_view_model();
    view! { <LoginForm view_model=view_model /> }
}
