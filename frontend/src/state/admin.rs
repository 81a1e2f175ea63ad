use crate::{
    api::{AdminLoginRequest, ApiClient, ApiError, Doctor},
    state::toast::{use_toasts, ToastStore},
    utils::storage,
};
use leptos::*;
use std::rc::Rc;

/// Session-scoped admin state: the session token and the doctor collection.
/// Created when the app mounts and emptied on logout.
#[derive(Clone)]
pub struct AdminStore {
    api: Rc<ApiClient>,
    pub token: RwSignal<Option<String>>,
    pub doctors: RwSignal<Vec<Doctor>>,
    toasts: ToastStore,
}

impl AdminStore {
    pub fn new(api: Rc<ApiClient>, toasts: ToastStore) -> Self {
        Self {
            api,
            token: create_rw_signal(None),
            doctors: create_rw_signal(Vec::new()),
            toasts,
        }
    }

    /// Picks up a token persisted by an earlier login.
    pub fn restore(api: Rc<ApiClient>, toasts: ToastStore) -> Self {
        let store = Self::new(api, toasts);
        store.token.set(storage::load_token());
        store
    }

    pub fn api(&self) -> Rc<ApiClient> {
        Rc::clone(&self.api)
    }

    pub fn toasts(&self) -> ToastStore {
        self.toasts
    }

    pub fn has_session(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub async fn backend_url(&self) -> String {
        self.api.resolved_base_url().await
    }

    fn require_token(&self) -> Result<String, ApiError> {
        self.token
            .get_untracked()
            .ok_or_else(|| ApiError::validation("Not authorized. Please log in again."))
    }

    pub async fn login(&self, email: String, password: String) -> Result<(), ApiError> {
        let token = self
            .api
            .admin_login(&AdminLoginRequest { email, password })
            .await?;
        storage::save_token(&token);
        self.token.set(Some(token));
        log::info!("Admin session started");
        Ok(())
    }

    pub fn logout(&self) {
        storage::clear_token();
        self.token.set(None);
        self.doctors.set(Vec::new());
        log::info!("Admin session ended");
    }

    /// Whether `token` is still the live session token.
    fn session_is(&self, token: &str) -> bool {
        self.token
            .try_with_untracked(|current| current.as_deref() == Some(token))
            .unwrap_or(false)
    }

    pub async fn get_all_doctors(&self) -> Result<(), ApiError> {
        let token = match self.require_token() {
            Ok(token) => token,
            Err(err) => {
                self.toasts.error(err.to_string());
                return Err(err);
            }
        };
        let result = self.api.admin_all_doctors(&token).await;
        // The session may have ended or changed while the request was out.
        if !self.session_is(&token) {
            log::debug!("Dropping doctors fetched for a closed session");
            return Err(ApiError::cancelled());
        }
        match result {
            Ok(doctors) => {
                log::debug!("Loaded {} doctors", doctors.len());
                self.doctors.set(doctors);
                Ok(())
            }
            Err(err) => {
                log::error!("Loading doctors failed: {}", err);
                self.toasts.error(err.to_string());
                Err(err)
            }
        }
    }

    pub async fn change_availability(&self, doc_id: String) -> Result<(), ApiError> {
        let token = match self.require_token() {
            Ok(token) => token,
            Err(err) => {
                self.toasts.error(err.to_string());
                return Err(err);
            }
        };
        let result = self.api.admin_change_availability(&token, &doc_id).await;
        if !self.session_is(&token) {
            return Err(ApiError::cancelled());
        }
        match result {
            Ok(message) => {
                self.toasts.success(message);
                self.get_all_doctors().await
            }
            Err(err) => {
                log::error!("Changing availability of {} failed: {}", doc_id, err);
                self.toasts.error(err.to_string());
                Err(err)
            }
        }
    }

    pub fn spawn_get_all_doctors(&self) {
        let store = self.clone();
        spawn_local(async move {
            let _ = store.get_all_doctors().await;
        });
    }

    pub fn spawn_change_availability(&self, doc_id: String) {
        let store = self.clone();
        spawn_local(async move {
            let _ = store.change_availability(doc_id).await;
        });
    }
}

#[component]
pub fn AdminProvider(children: Children) -> impl IntoView {
    let toasts = use_toasts();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    provide_context(AdminStore::restore(Rc::new(api), toasts));
    view! { <>{children()}</> }
}

pub fn use_admin() -> AdminStore {
    use_context::<AdminStore>()
        .unwrap_or_else(|| AdminStore::new(Rc::new(ApiClient::new()), use_toasts()))
}
