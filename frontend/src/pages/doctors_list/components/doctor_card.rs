use crate::api::Doctor;
use leptos::*;
use wasm_bindgen::JsCast;

/// Asks the owner of the collection to flip a doctor's availability. Card
/// state is left alone; the refreshed collection re-renders it.
pub fn toggle_availability(doctor_id: &str, on_toggle: Callback<String>) {
    on_toggle.call(doctor_id.to_string());
}

#[component]
pub fn DoctorCard(doctor: Doctor, on_toggle: Callback<String>) -> impl IntoView {
    let Doctor {
        id,
        name,
        image,
        speciality,
        available,
    } = doctor;

    let doctor_id = id.clone();
    let on_change = move |ev: ev::Event| {
        // Controlled checkbox: undo the browser's flip until the store says otherwise.
        if let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            input.set_checked(available);
        }
        toggle_availability(&doctor_id, on_toggle);
    };

    view! {
        <div
            class="border border-indigo-200 rounded-xl max-w-56 overflow-hidden cursor-pointer group"
            data-doctor-id=id
        >
            <img
                class="bg-indigo-50 group-hover:bg-primary transition-all duration-500"
                src=image
                alt=""
            />
            <div class="p-4">
                <p class="text-neutral-800 text-lg font-medium">{name}</p>
                <p class="text-zinc-600 text-sm">{speciality}</p>
                <div class="mt-2 flex items-center gap-1 text-sm">
                    <input
                        type="checkbox"
                        checked=available
                        prop:checked=available
                        on:change=on_change
                    />
                    <p>"Available"</p>
                </div>
            </div>
        </div>
    }
}
