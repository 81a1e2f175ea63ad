use crate::components::layout::Layout;
use leptos::*;

use super::{
    components::{
        fields::{DraftInput, ExperienceSelect, LabeledField, SpecialitySelect},
        image_picker::ImagePicker,
    },
    utils::DraftField,
    view_model::use_add_doctor_view_model,
};

#[component]
pub fn AddDoctorPage() -> impl IntoView {
    let view_model = use_add_doctor_view_model();
    let pending = view_model.pending();
    let busy = view_model.busy();
    let draft = view_model.draft;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        view_model.submit();
    };

    view! {
        <Layout>
            <form on:submit=on_submit class="m-5 w-full">
                <p class="mb-3 text-lg font-medium">{"Add Doctor"}</p>

                <div class="bg-white px-8 py-8 border rounded w-full max-w-4xl max-h-[80vh] overflow-y-scroll">
                    <ImagePicker view_model=view_model />

                    <div class="flex flex-col lg:flex-row items-start gap-10 text-gray-600">
                        <div class="w-full lg:flex-1 flex flex-col gap-4">
                            <LabeledField label="Doctor name">
                                <DraftInput view_model=view_model field=DraftField::Name name="name" placeholder="Name" />
                            </LabeledField>
                            <LabeledField label="Doctor Email">
                                <DraftInput view_model=view_model field=DraftField::Email name="email" placeholder="Email" input_type="email" />
                            </LabeledField>
                            <LabeledField label="Doctor Password">
                                <DraftInput view_model=view_model field=DraftField::Password name="password" placeholder="Password" input_type="password" />
                            </LabeledField>
                            <LabeledField label="Experience">
                                <ExperienceSelect view_model=view_model />
                            </LabeledField>
                            <LabeledField label="Fees">
                                <DraftInput view_model=view_model field=DraftField::Fees name="fees" placeholder="Fees" input_type="number" />
                            </LabeledField>
                        </div>

                        <div class="w-full lg:flex-1 flex flex-col gap-4">
                            <LabeledField label="Speciality">
                                <SpecialitySelect view_model=view_model />
                            </LabeledField>
                            <LabeledField label="Education">
                                <DraftInput view_model=view_model field=DraftField::Education name="education" placeholder="Education" />
                            </LabeledField>
                            <LabeledField label="Address">
                                <DraftInput view_model=view_model field=DraftField::Address1 name="address1" placeholder="Address 1" />
                                <DraftInput view_model=view_model field=DraftField::Address2 name="address2" placeholder="Address 2" />
                            </LabeledField>
                        </div>
                    </div>

                    <div>
                        <p class="mt-4 mb-2">{"About Doctor"}</p>
                        <textarea
                            class="w-full px-4 pt-2 border rounded"
                            name="about"
                            required=true
                            placeholder="Write about doctor"
                            rows=5
                            prop:value=move || draft.with(|d| d.about.clone())
                            on:input=move |ev| view_model.handle_change(DraftField::About, event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button
                        type="submit"
                        disabled=move || busy.get()
                        class="bg-primary px-10 py-3 mt-4 text-white rounded-full disabled:opacity-50"
                    >
                        {move || if pending.get() { "Adding..." } else { "Add doctor" }}
                    </button>
                </div>
            </form>
        </Layout>
    }
}
