use crate::{api::Doctor, components::layout::Layout, state::admin::use_admin};
use leptos::*;

use super::components::doctor_card::DoctorCard;

/// Cards are keyed on the whole record, so any refreshed field re-renders.
fn card_key(doctor: &Doctor) -> Doctor {
    doctor.clone()
}

#[component]
pub fn DoctorGrid(
    #[prop(into)] doctors: Signal<Vec<Doctor>>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="m-5 max-h-[90vh] overflow-y-scroll">
            <h1 class="text-lg font-medium">{"All Doctors"}</h1>
            <div class="w-full flex flex-wrap gap-4 pt-5 gap-y-6">
                <For
                    each=move || doctors.get()
                    key=card_key
                    children=move |doctor: Doctor| {
                        view! { <DoctorCard doctor=doctor on_toggle=on_toggle /> }
                    }
                />
            </div>
        </div>
    }
}

#[component]
pub fn DoctorsListPage() -> impl IntoView {
    let store = use_admin();
    let token = store.token;
    let doctors = store.doctors;

    {
        let store = store.clone();
        create_effect(move |_| {
            if token.with(Option::is_some) {
                store.spawn_get_all_doctors();
            }
        });
    }

    let on_toggle = Callback::new(move |doc_id: String| store.spawn_change_availability(doc_id));

    view! {
        <Layout>
            <DoctorGrid doctors=doctors on_toggle=on_toggle />
        </Layout>
    }
}
