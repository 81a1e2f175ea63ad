use crate::pages::add_doctor::{
    utils::{experience_options, DraftField},
    view_model::AddDoctorViewModel,
};
use crate::api::Speciality;
use leptos::*;

const INPUT_CLASS: &str = "border rounded px-3 py-2";

#[component]
pub fn DraftInput(
    view_model: AddDoctorViewModel,
    field: DraftField,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let draft = view_model.draft;
    view! {
        <input
            class=INPUT_CLASS
            type=input_type
            name=name
            placeholder=placeholder
            required=true
            prop:value=move || draft.with(|d| d.field_value(field))
            on:input=move |ev| view_model.handle_change(field, event_target_value(&ev))
        />
    }
}

#[component]
pub fn LabeledField(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <div class="flex-1 flex flex-col gap-1">
            <p>{label}</p>
            {children()}
        </div>
    }
}

#[component]
pub fn ExperienceSelect(view_model: AddDoctorViewModel) -> impl IntoView {
    let draft = view_model.draft;
    view! {
        <select
            class=INPUT_CLASS
            name="experience"
            prop:value=move || draft.with(|d| d.experience.clone())
            on:change=move |ev| view_model.handle_change(DraftField::Experience, event_target_value(&ev))
        >
            <option value="">{"Select Experience"}</option>
            {experience_options()
                .into_iter()
                .map(|(value, label)| {
                    let selected = value.clone();
                    view! {
                        <option
                            value=value
                            selected=move || draft.with(|d| d.experience == selected)
                        >
                            {label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn SpecialitySelect(view_model: AddDoctorViewModel) -> impl IntoView {
    let draft = view_model.draft;
    view! {
        <select
            class=INPUT_CLASS
            name="speciality"
            prop:value=move || draft.with(|d| d.speciality.as_str().to_string())
            on:change=move |ev| view_model.handle_change(DraftField::Speciality, event_target_value(&ev))
        >
            {Speciality::ALL
                .iter()
                .map(|speciality| {
                    let speciality = *speciality;
                    view! {
                        <option
                            value=speciality.as_str()
                            selected=move || draft.with(|d| d.speciality == speciality)
                        >
                            {speciality.as_str()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
