use crate::pages::add_doctor::view_model::AddDoctorViewModel;
use leptos::*;
use web_sys::HtmlInputElement;

/// Shown until an image is picked.
pub const UPLOAD_PLACEHOLDER: &str = "/assets/upload_area.svg";

#[component]
pub fn ImagePicker(view_model: AddDoctorViewModel) -> impl IntoView {
    let preview_src = view_model.preview_src;
    let on_change = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        view_model.handle_file_change(file);
    };

    view! {
        <div class="flex items-center gap-4 mb-8 text-gray-500">
            <label for="doc-img">
                <img
                    class="w-16 bg-gray-100 rounded-full cursor-pointer"
                    src=move || preview_src.get().unwrap_or_else(|| UPLOAD_PLACEHOLDER.to_string())
                    alt=""
                />
            </label>
            <input type="file" id="doc-img" hidden=true on:change=on_change />
            <p>"Upload doctor" <br /> "picture"</p>
        </div>
    }
}
