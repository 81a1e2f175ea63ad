use crate::pages::login::view_model::LoginViewModel;
use leptos::*;

#[component]
pub fn LoginForm(view_model: LoginViewModel) -> impl IntoView {
    let pending = view_model.pending();
    let email = view_model.email;
    let password = view_model.password;

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        view_model.submit();
    };

    view! {
        <form class="min-h-[80vh] flex items-center" on:submit=handle_submit>
            <div class="flex flex-col gap-3 m-auto items-start p-8 min-w-[340px] sm:min-w-96 border rounded-xl text-[#5E5E5E] text-sm shadow-lg">
                <p class="text-2xl font-semibold m-auto">
                    <span class="text-primary">{"Admin"}</span>
                    {" Login"}
                </p>
                <div class="w-full">
                    <p>{"Email"}</p>
                    <input
                        class="border border-[#DADADA] rounded w-full p-2 mt-1"
                        type="email"
                        name="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="w-full">
                    <p>{"Password"}</p>
                    <input
                        class="border border-[#DADADA] rounded w-full p-2 mt-1"
                        type="password"
                        name="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class="bg-primary text-white w-full py-2 rounded-md text-base disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Logging in..." } else { "Login" }}
                </button>
            </div>
        </form>
    }
}
