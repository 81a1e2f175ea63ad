use crate::state::admin::use_admin;
use leptos::*;

/// Sidebar entries as `(href, label)`.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/add-doctor", "Add Doctor"),
    ("/doctor-list", "Doctors List"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_admin();
    let on_logout = move |_| {
        store.logout();
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/");
        }
    };

    view! {
        <header class="flex justify-between items-center px-4 sm:px-10 py-3 border-b bg-white">
            <div class="flex items-center gap-2 text-xs">
                <h1 class="text-xl font-semibold text-primary">"Clinic Admin"</h1>
                <p class="border px-2.5 py-0.5 rounded-full border-gray-500 text-gray-600">
                    "Admin"
                </p>
            </div>
            <button
                on:click=on_logout
                class="bg-primary text-white text-sm px-10 py-2 rounded-full"
            >
                "Logout"
            </button>
        </header>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="min-h-screen bg-white border-r">
            <ul class="text-[#515151] mt-5">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <a
                                    href=*href
                                    class="flex items-center gap-3 py-3.5 px-3 md:px-9 md:min-w-72 cursor-pointer hover:bg-[#F2F3FF]"
                                >
                                    <p>{*label}</p>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="bg-[#F8F9FD] min-h-screen">
            <Navbar/>
            <div class="flex items-start">
                <Sidebar/>
                <main class="flex-1">{children()}</main>
            </div>
        </div>
    }
}
