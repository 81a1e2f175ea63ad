use super::{
    repository::AddDoctorRepository,
    utils::{DoctorDraft, DraftField},
};
use crate::{
    api::{ApiError, ImageUpload},
    state::{admin::use_admin, toast::ToastStore},
    utils::{file::read_image, object_url::PreviewSlot},
};
use futures::future::{AbortHandle, Abortable};
use leptos::*;
use std::{cell::RefCell, future::Future, rc::Rc};

const NO_SESSION_MESSAGE: &str = "Not authorized. Please log in again.";
pub const IMAGE_LOADING_MESSAGE: &str = "Please wait for the image to finish loading";

/// The abort handle of the create request currently out, if any.
#[derive(Clone, Default)]
pub struct InFlightRequest {
    handle: Rc<RefCell<Option<AbortHandle>>>,
}

impl InFlightRequest {
    /// Makes `request` abortable through this handle. A request tracked
    /// earlier is aborted.
    pub fn track<T>(
        &self,
        request: impl Future<Output = Result<T, ApiError>>,
    ) -> impl Future<Output = Result<T, ApiError>> {
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.handle.borrow_mut().replace(handle) {
            previous.abort();
        }
        async move {
            Abortable::new(request, registration)
                .await
                .unwrap_or_else(|_| Err(ApiError::cancelled()))
        }
    }

    pub fn abort(&self) {
        if let Some(handle) = self.handle.borrow_mut().take() {
            handle.abort();
        }
    }
}

#[derive(Clone, Copy)]
pub struct AddDoctorViewModel {
    pub draft: RwSignal<DoctorDraft>,
    pub preview_src: RwSignal<Option<String>>,
    pub image_loading: RwSignal<bool>,
    pub submit_action: Action<DoctorDraft, Result<String, ApiError>>,
    preview: StoredValue<PreviewSlot>,
    latest_pick: StoredValue<u64>,
    toasts: ToastStore,
}

/// Validates the draft and posts it. A draft without an image never reaches
/// the network.
pub async fn submit_draft(
    repo: AddDoctorRepository,
    token: Option<String>,
    draft: DoctorDraft,
) -> Result<String, ApiError> {
    let payload = draft.to_payload()?;
    let token = token.ok_or_else(|| ApiError::validation(NO_SESSION_MESSAGE))?;
    repo.add_doctor(&token, payload).await
}

/// Reports a finished submission. Returns `true` when the draft was reset.
pub fn apply_submit_outcome(
    draft: RwSignal<DoctorDraft>,
    toasts: ToastStore,
    outcome: Result<String, ApiError>,
) -> bool {
    match outcome {
        Ok(message) => {
            toasts.success(message);
            draft.update(DoctorDraft::reset);
            true
        }
        Err(err) if err.is_cancelled() => false,
        Err(err) => {
            log::error!("Adding doctor failed: {} ({})", err, err.code);
            toasts.error(err.to_string());
            false
        }
    }
}

impl AddDoctorViewModel {
    pub fn pending(&self) -> ReadSignal<bool> {
        self.submit_action.pending()
    }

    /// True while a submission is out or a picked image is still being read.
    pub fn busy(&self) -> Signal<bool> {
        let pending = self.pending();
        let image_loading = self.image_loading;
        Signal::derive(move || pending.get() || image_loading.get())
    }

    pub fn handle_change(&self, field: DraftField, value: String) {
        self.draft.update(|draft| draft.set_field(field, value));
    }

    /// Swaps in a newly picked file: the preview is replaced right away and
    /// the bytes land in the draft once read, unless another pick came first.
    pub fn handle_file_change(&self, file: Option<web_sys::File>) {
        let Some(file) = file else {
            self.forget_image();
            self.draft.update(DoctorDraft::clear_image);
            return;
        };
        let ticket = self.begin_pick();
        let src = self
            .preview
            .try_update_value(|slot| slot.replace(&file))
            .flatten();
        self.preview_src.set(src);

        let view_model = *self;
        spawn_local(async move {
            let read = read_image(&file).await;
            view_model.finish_pick(ticket, read);
        });
    }

    /// Starts a new pick and returns its ticket. Reads started for earlier
    /// tickets are ignored from now on.
    pub fn begin_pick(&self) -> u64 {
        let ticket = self.latest_pick.get_value() + 1;
        self.latest_pick.set_value(ticket);
        self.image_loading.set(true);
        ticket
    }

    /// Applies a finished read if it belongs to the latest pick. Returns
    /// `true` when the draft took the image.
    pub fn finish_pick(&self, ticket: u64, read: Result<ImageUpload, String>) -> bool {
        if self.latest_pick.try_get_value() != Some(ticket) {
            log::debug!("Ignoring image read for superseded pick {}", ticket);
            return false;
        }
        let _ = self.image_loading.try_set(false);
        match read {
            Ok(image) => self
                .draft
                .try_update(|draft| draft.set_image(image))
                .is_some(),
            Err(err) => {
                log::error!("{}", err);
                self.toasts.error(err);
                false
            }
        }
    }

    /// Drops the preview and any read still in progress.
    fn forget_image(&self) {
        if let Some(ticket) = self.latest_pick.try_get_value() {
            let _ = self.latest_pick.try_set_value(ticket + 1);
        }
        let _ = self.image_loading.try_set(false);
        let _ = self.preview.try_update_value(PreviewSlot::clear);
        let _ = self.preview_src.try_set(None);
    }

    /// Dispatches the create request unless one is already in flight.
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        if self.image_loading.get_untracked() {
            self.toasts.error(IMAGE_LOADING_MESSAGE);
            return;
        }
        let draft = self.draft.get_untracked();
        if let Err(err) = draft.validate() {
            self.toasts.error(err.to_string());
            return;
        }
        self.submit_action.dispatch(draft);
    }
}

pub fn use_add_doctor_view_model() -> AddDoctorViewModel {
    let store = use_admin();
    let toasts = store.toasts();
    let repository = AddDoctorRepository::new_with_client(store.api());
    let token = store.token;

    let draft = create_rw_signal(DoctorDraft::default());
    let preview_src = create_rw_signal(None::<String>);
    let image_loading = create_rw_signal(false);
    let preview = store_value(PreviewSlot::default());
    let latest_pick = store_value(0_u64);
    let in_flight = InFlightRequest::default();

    let tracker = in_flight.clone();
    let submit_action = create_action(move |draft: &DoctorDraft| {
        tracker.track(submit_draft(
            repository.clone(),
            token.get_untracked(),
            draft.clone(),
        ))
    });

    let view_model = AddDoctorViewModel {
        draft,
        preview_src,
        image_loading,
        submit_action,
        preview,
        latest_pick,
        toasts,
    };

    create_effect(move |_| {
        if let Some(outcome) = submit_action.value().get() {
            if apply_submit_outcome(draft, toasts, outcome) {
                view_model.forget_image();
            }
        }
    });

    on_cleanup(move || {
        in_flight.abort();
        view_model.forget_image();
    });

    view_model
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::state::toast::ToastKind;
    use crate::test_support::helpers::{image, provide_admin};
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    fn repository(server: &MockServer) -> AddDoctorRepository {
        AddDoctorRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )))
    }

    fn filled_draft() -> DoctorDraft {
        let mut draft = DoctorDraft::default();
        draft.set_field(DraftField::Name, "Dr. Sarah Patel".into());
        draft.set_field(DraftField::Email, "sarah@clinic.example".into());
        draft.set_field(DraftField::Password, "s3cretpass".into());
        draft.set_field(DraftField::Experience, "6".into());
        draft.set_field(DraftField::Fees, "60".into());
        draft.set_field(DraftField::Speciality, "Gynecologist".into());
        draft.set_field(DraftField::Education, "MD".into());
        draft.set_field(DraftField::Address1, "1 Harbour Rd".into());
        draft.set_field(DraftField::Address2, "Block B".into());
        draft.set_field(DraftField::About, "Prenatal care".into());
        draft
    }

    #[tokio::test]
    async fn submit_without_image_never_calls_backend() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/admin/add-doctor");
                then.status(200)
                    .json_body(json!({ "success": true, "message": "Doctor Added" }));
            })
            .await;

        let err = submit_draft(repository(&server), Some("tok-1".into()), filled_draft())
            .await
            .unwrap_err();

        assert_eq!(err.error, "Please select an image");
        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn submit_with_image_posts_every_field() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/admin/add-doctor")
                    .header("atoken", "tok-1")
                    .body_contains("name=\"image\"")
                    .body_contains("name=\"name\"\r\n\r\nDr. Sarah Patel")
                    .body_contains("name=\"email\"\r\n\r\nsarah@clinic.example")
                    .body_contains("name=\"password\"\r\n\r\ns3cretpass")
                    .body_contains("name=\"experience\"\r\n\r\n6")
                    .body_contains("name=\"fess\"\r\n\r\n60")
                    .body_contains("name=\"about\"\r\n\r\nPrenatal care")
                    .body_contains("name=\"speciality\"\r\n\r\nGynecologist")
                    .body_contains("name=\"degree\"\r\n\r\nMD")
                    .body_contains(r#"{"line1":"1 Harbour Rd","line2":"Block B"}"#);
                then.status(200)
                    .json_body(json!({ "success": true, "message": "Doctor Added" }));
            })
            .await;

        let mut draft = filled_draft();
        draft.set_image(image());
        let message = submit_draft(repository(&server), Some("tok-1".into()), draft)
            .await
            .unwrap();

        assert_eq!(message, "Doctor Added");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn submit_without_session_never_calls_backend() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/admin/add-doctor");
                then.status(200).json_body(json!({ "success": true }));
            })
            .await;

        let mut draft = filled_draft();
        draft.set_image(image());
        let err = submit_draft(repository(&server), None, draft).await.unwrap_err();

        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn success_resets_draft_to_defaults() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/admin/add-doctor");
                then.status(200)
                    .json_body(json!({ "success": true, "message": "Doctor Added" }));
            })
            .await;

        let runtime = create_runtime();
        let toasts = ToastStore::new();
        let mut filled = filled_draft();
        filled.set_image(image());
        let draft = create_rw_signal(filled.clone());

        let outcome = submit_draft(repository(&server), Some("tok-1".into()), filled).await;
        assert!(apply_submit_outcome(draft, toasts, outcome));

        let reset = draft.get();
        assert_eq!(reset, DoctorDraft::default());
        assert_eq!(reset.experience, "1");
        assert_eq!(reset.speciality.as_str(), "General physician");
        assert!(reset.image.is_none());
        let shown = toasts.toasts().get();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, ToastKind::Success);
        assert_eq!(shown[0].message, "Doctor Added");
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejection_keeps_draft_and_shows_one_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/admin/add-doctor");
                then.status(200)
                    .json_body(json!({ "success": false, "message": "Please enter a valid email" }));
            })
            .await;

        let runtime = create_runtime();
        let toasts = ToastStore::new();
        let mut filled = filled_draft();
        filled.set_image(image());
        let draft = create_rw_signal(filled.clone());

        let outcome = submit_draft(repository(&server), Some("tok-1".into()), filled.clone()).await;
        assert!(!apply_submit_outcome(draft, toasts, outcome));

        assert_eq!(draft.get(), filled);
        let shown = toasts.toasts().get();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, ToastKind::Error);
        assert_eq!(shown[0].message, "Please enter a valid email");
        runtime.dispose();
    }

    #[tokio::test]
    async fn transport_error_keeps_draft_and_shows_one_error() {
        let runtime = create_runtime();
        let toasts = ToastStore::new();
        let mut filled = filled_draft();
        filled.set_image(image());
        let draft = create_rw_signal(filled.clone());
        let repo = AddDoctorRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            "http://127.0.0.1:9",
        )));

        let outcome = submit_draft(repo, Some("tok-1".into()), filled.clone()).await;
        assert!(!apply_submit_outcome(draft, toasts, outcome));

        assert_eq!(draft.get(), filled);
        let shown = toasts.toasts().get();
        assert_eq!(shown.len(), 1);
        assert!(shown[0].message.starts_with("Request failed"));
        runtime.dispose();
    }

    #[test]
    fn cancelled_outcome_is_silent() {
        crate::test_support::ssr::with_runtime(|| {
            let toasts = ToastStore::new();
            let draft = create_rw_signal(filled_draft());
            assert!(!apply_submit_outcome(draft, toasts, Err(ApiError::cancelled())));
            assert!(toasts.toasts().get().is_empty());
            assert_eq!(draft.get(), filled_draft());
        });
    }

    #[test]
    fn handle_change_merges_single_field() {
        crate::test_support::ssr::with_runtime(|| {
            let view_model = use_add_doctor_view_model();
            view_model.handle_change(DraftField::Fees, "80".into());
            view_model.handle_change(DraftField::Speciality, "Dermatologist".into());
            let draft = view_model.draft.get();
            assert_eq!(draft.fees, "80");
            assert_eq!(draft.speciality.as_str(), "Dermatologist");
            assert_eq!(draft.experience, "1");
        });
    }

    #[test]
    fn submit_without_image_shows_error_without_dispatch() {
        crate::test_support::ssr::with_runtime(|| {
            let view_model = use_add_doctor_view_model();
            view_model.submit();
            assert_eq!(view_model.submit_action.version().get(), 0);
            let shown = view_model.toasts.toasts().get();
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].message, "Please select an image");
        });
    }

    fn named_image(file_name: &str) -> ImageUpload {
        ImageUpload {
            file_name: file_name.into(),
            ..image()
        }
    }

    #[test]
    fn only_latest_pick_reaches_draft() {
        crate::test_support::ssr::with_runtime(|| {
            let view_model = use_add_doctor_view_model();
            let first = view_model.begin_pick();
            let second = view_model.begin_pick();
            assert!(view_model.image_loading.get());

            assert!(view_model.finish_pick(second, Ok(named_image("second.png"))));
            assert!(!view_model.finish_pick(first, Ok(named_image("first.png"))));

            let draft = view_model.draft.get();
            assert_eq!(draft.image.map(|image| image.file_name).as_deref(), Some("second.png"));
            assert!(!view_model.image_loading.get());
        });
    }

    #[test]
    fn read_finishing_after_picker_cleared_is_ignored() {
        crate::test_support::ssr::with_runtime(|| {
            let view_model = use_add_doctor_view_model();
            let ticket = view_model.begin_pick();
            view_model.handle_file_change(None);

            assert!(!view_model.finish_pick(ticket, Ok(image())));
            assert!(view_model.draft.get().image.is_none());
            assert!(!view_model.image_loading.get());
        });
    }

    #[test]
    fn read_finishing_after_reset_is_ignored() {
        crate::test_support::ssr::with_runtime(|| {
            let view_model = use_add_doctor_view_model();
            let ticket = view_model.begin_pick();
            view_model.draft.update(DoctorDraft::reset);
            view_model.forget_image();

            assert!(!view_model.finish_pick(ticket, Ok(image())));
            assert_eq!(view_model.draft.get(), DoctorDraft::default());
        });
    }

    #[test]
    fn failed_read_shows_error_and_clears_loading() {
        crate::test_support::ssr::with_runtime(|| {
            let view_model = use_add_doctor_view_model();
            let ticket = view_model.begin_pick();
            assert!(!view_model.finish_pick(ticket, Err("Failed to read a.png".into())));
            assert!(!view_model.image_loading.get());
            let shown = view_model.toasts.toasts().get();
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].message, "Failed to read a.png");
        });
    }

    #[test]
    fn submit_while_image_is_loading_waits() {
        crate::test_support::ssr::with_runtime(|| {
            let view_model = use_add_doctor_view_model();
            view_model.draft.update(|draft| draft.set_image(image()));
            view_model.begin_pick();

            assert!(view_model.busy().get());
            view_model.submit();

            assert_eq!(view_model.submit_action.version().get(), 0);
            let shown = view_model.toasts.toasts().get();
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].message, IMAGE_LOADING_MESSAGE);
        });
    }

    #[tokio::test]
    async fn second_submit_while_pending_is_ignored() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/admin/add-doctor");
                then.status(200)
                    .delay(Duration::from_millis(200))
                    .json_body(json!({ "success": true, "message": "Doctor Added" }));
            })
            .await;
        let base_url = server.base_url();

        tokio::task::LocalSet::new()
            .run_until(async move {
                let runtime = create_runtime();
                provide_admin(&base_url, Some("tok-1"), Vec::new());
                let view_model = use_add_doctor_view_model();
                view_model.draft.update(|draft| {
                    *draft = filled_draft();
                    draft.set_image(image());
                });

                view_model.submit();
                assert!(view_model.pending().get_untracked());
                view_model.submit();

                for _ in 0..200 {
                    if !view_model.pending().get_untracked() {
                        break;
                    }
                    tokio::time::sleep(Duration::from_millis(10)).await;
                }

                assert_eq!(view_model.submit_action.version().get_untracked(), 1);
                assert_eq!(
                    view_model.submit_action.value().get_untracked(),
                    Some(Ok("Doctor Added".to_string()))
                );
                runtime.dispose();
            })
            .await;

        assert_eq!(mock.hits_async().await, 1);
    }

    #[tokio::test]
    async fn aborted_request_is_cancelled_and_silent() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/admin/add-doctor");
                then.status(200)
                    .delay(Duration::from_millis(300))
                    .json_body(json!({ "success": true, "message": "Doctor Added" }));
            })
            .await;

        let runtime = create_runtime();
        let toasts = ToastStore::new();
        let mut filled = filled_draft();
        filled.set_image(image());
        let draft = create_rw_signal(filled.clone());
        let in_flight = InFlightRequest::default();

        let request = in_flight.track(submit_draft(
            repository(&server),
            Some("tok-1".into()),
            filled.clone(),
        ));
        let (outcome, ()) = futures::join!(request, async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            in_flight.abort();
        });

        assert!(outcome.as_ref().unwrap_err().is_cancelled());
        assert!(!apply_submit_outcome(draft, toasts, outcome));
        assert!(toasts.toasts().get().is_empty());
        assert_eq!(draft.get(), filled);
        runtime.dispose();
    }

    #[tokio::test]
    async fn tracking_a_new_request_aborts_the_previous_one() {
        let in_flight = InFlightRequest::default();
        let first = in_flight.track(futures::future::pending::<Result<String, ApiError>>());
        let second = in_flight.track(async { Ok::<_, ApiError>("second".to_string()) });

        assert!(first.await.unwrap_err().is_cancelled());
        assert_eq!(second.await.unwrap(), "second");
    }
}
