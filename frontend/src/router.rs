use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    components::{guard::RequireSession, toast::ToastContainer},
    pages::{add_doctor::AddDoctorPage, doctors_list::DoctorsListPage},
    state::{admin::AdminProvider, toast::provide_toasts},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/add-doctor", "/doctor-list"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/", "/add-doctor", "/doctor-list"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_toasts();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Title text="Clinic Admin"/>
        <AdminProvider>
            <ToastContainer/>
            <Router>
                <Routes>
                    <Route path="/" view=ProtectedDoctorsList/>
                    <Route path="/add-doctor" view=ProtectedAddDoctor/>
                    <Route path="/doctor-list" view=ProtectedDoctorsList/>
                </Routes>
            </Router>
        </AdminProvider>
    }
}

#[component]
fn ProtectedAddDoctor() -> impl IntoView {
    view! { <RequireSession><AddDoctorPage/></RequireSession> }
}

#[component]
fn ProtectedDoctorsList() -> impl IntoView {
    view! { <RequireSession><DoctorsListPage/></RequireSession> }
}
