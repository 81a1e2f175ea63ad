#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod helpers {
    use crate::api::{ApiClient, Doctor, ImageUpload};
    use crate::state::{admin::AdminStore, toast::ToastStore};
    use leptos::*;
    use std::rc::Rc;

    pub fn doctor(id: &str, available: bool) -> Doctor {
        Doctor {
            id: id.into(),
            name: format!("Dr. {}", id),
            image: format!("https://cdn.example/{}.png", id),
            speciality: "General physician".into(),
            available,
        }
    }

    pub fn image() -> ImageUpload {
        ImageUpload {
            file_name: "avatar.png".into(),
            mime_type: Some("image/png".into()),
            bytes: b"PNGDATA".to_vec(),
        }
    }

    /// Provides toast and admin stores pointing at `base_url`.
    pub fn provide_admin(base_url: &str, token: Option<&str>, doctors: Vec<Doctor>) -> AdminStore {
        let toasts = ToastStore::new();
        provide_context(toasts);
        let store = AdminStore::new(Rc::new(ApiClient::new_with_base_url(base_url)), toasts);
        store.token.set(token.map(str::to_string));
        store.doctors.set(doctors);
        provide_context(store.clone());
        store
    }
}
