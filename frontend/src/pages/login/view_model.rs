use super::utils::validate_credentials;
use crate::{
    api::{AdminLoginRequest, ApiError},
    state::{admin::use_admin, toast::ToastStore},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub login_action: Action<AdminLoginRequest, Result<(), ApiError>>,
    toasts: ToastStore,
}

impl LoginViewModel {
    pub fn pending(&self) -> Signal<bool> {
        self.login_action.pending().into()
    }

    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match validate_credentials(&self.email.get_untracked(), &self.password.get_untracked()) {
            Ok(request) => self.login_action.dispatch(request),
            Err(err) => {
                self.toasts.error(err.to_string());
            }
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let store = use_admin();
    let toasts = store.toasts();
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());

    let login_action = create_action(move |request: &AdminLoginRequest| {
        let store = store.clone();
        let AdminLoginRequest { email, password } = request.clone();
        async move { store.login(email, password).await }
    });

    create_effect(move |_| {
        if let Some(Err(err)) = login_action.value().get() {
            log::warn!("Admin login rejected: {}", err);
            toasts.error(err.to_string());
            password.set(String::new());
        }
    });

    LoginViewModel {
        email,
        password,
        login_action,
        toasts,
    }
}
