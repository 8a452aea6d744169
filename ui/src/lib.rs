use leptos::prelude::*;

mod api;
mod components;
mod types;

use components::multi_select::MultiSelect;
use types::Entry;

#[component]
pub fn App() -> impl IntoView {
    let users = LocalResource::new(|| async move {
        match api::list_users().await {
            Ok(users) => users,
            Err(e) => {
                log::warn!("Using bundled users, host API unavailable: {}", e);
                api::bundled_users()
            }
        }
    });
    let entries = Signal::derive(move || users.get().unwrap_or_default());

    let (selected_count, set_selected_count) = signal(0usize);

    view! {
        <main class="flex min-h-screen flex-col items-center justify-between p-4 md:p-24">
            <div class="w-full flex flex-col items-center">
                <h1 class="text-2xl md:text-6xl font-bold mb-16 text-center">"Custom Multi-Select"</h1>
                <div class="w-full md:w-3/4 lg:w-1/2">
                    <MultiSelect
                        entries=entries
                        on_change=Callback::new(move |selected: Vec<Entry>| {
                            set_selected_count.set(selected.len())
                        })
                    />
                    <p class="mt-2 text-xs text-neutral-400">
                        {move || format!("{} selected", selected_count.get())}
                    </p>
                </div>
            </div>
            <div class="w-full flex flex-col items-center text-sm">
                <FooterLink href="https://leptos.dev" label="Built with Leptos" />
                <FooterLink href="https://book.leptos.dev" label="Leptos book" />
            </div>
        </main>
    }
}

#[component]
fn FooterLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a href=href class="text-blue-600 hover:underline">
            {label}
        </a>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
