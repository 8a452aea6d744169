//! Searchable multi-select with removable chips.
//!
//! Users are picked from a filtered dropdown and shown as chips in front of
//! the search field. Chips are removed with their close icon, or with two
//! Backspace presses: the first highlights the last chip, the second removes it.

mod listeners;
pub mod state;

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::types::Entry;
use listeners::GlobalListeners;
use state::{SelectState, Toggle};

const AVATAR_SIZE: &str = "25";

/// Multi-select widget
///
/// Selection lives inside the widget; `on_change` receives a copy of the
/// whole selection every time it changes.
#[component]
pub fn MultiSelect(
    /// Users to pick from, in display order
    #[prop(into)]
    entries: Signal<Vec<Entry>>,
    /// Selection on mount
    #[prop(optional)]
    initial: Vec<Entry>,
    /// Callback when selection changes
    #[prop(optional)]
    on_change: Option<Callback<Vec<Entry>>>,
    /// Placeholder text for search input
    #[prop(default = "Search for users")]
    placeholder: &'static str,
) -> impl IntoView {
    let state = RwSignal::new(SelectState::new(initial));
    let root_ref: NodeRef<html::Div> = NodeRef::new();
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let notify = move || {
        if let Some(on_change) = on_change {
            on_change.run(state.with_untracked(|s| s.selected().to_vec()));
        }
    };

    let visible = Memo::new(move |_| {
        let entries = entries.get();
        state.with(|s| s.visible(&entries))
    });

    let pick = Callback::new(move |entry: Entry| {
        let mut outcome = Toggle::Added;
        state.update(|s| outcome = s.toggle(&entry));
        log::debug!("MultiSelect: {:?} {}", outcome, entry.name);
        notify();
    });

    let remove_chip = Callback::new(move |name: String| {
        let mut removed = None;
        state.update(|s| removed = s.remove(&name));
        if removed.is_some() {
            log::debug!("MultiSelect: removed {} via close icon", name);
            notify();
        }
    });

    GlobalListeners::subscribe(
        move |ev: web_sys::MouseEvent| {
            let Some(root) = root_ref.get_untracked() else {
                return;
            };
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if root.contains(target.as_ref()) {
                return;
            }
            let changed = state.with_untracked(|s| s.is_open() || s.highlighted().is_some());
            if changed {
                state.update(|s| s.dismiss());
            }
        },
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() != "Backspace" {
                return;
            }
            let mut removed = None;
            state.update(|s| removed = s.backspace());
            match removed {
                Some(entry) => {
                    log::debug!("MultiSelect: removed {} via backspace", entry.name);
                    notify();
                }
                None => log::debug!("MultiSelect: removal {:?}", state.with_untracked(|s| s.removal())),
            }
        },
    );

    view! {
        <div
            node_ref=root_ref
            class="border-b border-neutral-200 w-full flex items-center flex-wrap py-2 gap-2 cursor-text"
            on:click=move |_| {
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            }
        >
            // Chips
            {move || {
                let (chips, highlighted) = state.with(|s| (s.selected().to_vec(), s.highlighted()));
                chips.into_iter().enumerate().map(|(idx, entry)| view! {
                    <Chip entry=entry highlighted={highlighted == Some(idx)} on_remove=remove_chip />
                }).collect::<Vec<_>>()
            }}

            <div class="relative min-w-72 max-w-full">
                <input
                    node_ref=input_ref
                    type="text"
                    class="w-full p-2 text-xl outline-none"
                    placeholder=placeholder
                    prop:value=move || state.with(|s| s.query().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.set_query(value));
                    }
                    on:focus=move |_| state.update(|s| s.open())
                />

                // Dropdown
                {move || {
                    if !state.with(|s| s.is_open()) {
                        return view! { <span></span> }.into_any();
                    }

                    let items = visible.get();
                    if items.is_empty() {
                        let message = if state.with(|s| s.query().is_empty()) {
                            "All users selected"
                        } else {
                            "No matching users"
                        };
                        return view! {
                            <div class="mt-3 bg-white border absolute shadow rounded-lg w-64 px-4 py-3 text-sm text-neutral-400">
                                {message}
                            </div>
                        }.into_any();
                    }

                    view! {
                        <div class="mt-3 bg-white border absolute z-10 max-h-48 overflow-y-auto shadow rounded-lg overflow-hidden w-64">
                            {items.into_iter().map(|entry| view! {
                                <DropdownRow entry=entry on_pick=pick />
                            }).collect::<Vec<_>>()}
                        </div>
                    }.into_any()
                }}
            </div>
        </div>
    }
}

#[component]
fn Avatar(url: String, alt: String, class: &'static str) -> impl IntoView {
    view! {
        <img src=url alt=alt width=AVATAR_SIZE height=AVATAR_SIZE class=class />
    }
}

/// Selected user with a close icon
#[component]
fn Chip(entry: Entry, highlighted: bool, on_remove: Callback<String>) -> impl IntoView {
    let tone = if highlighted {
        "border-blue-600 bg-blue-600 bg-opacity-10 text-blue-600"
    } else {
        "border-neutral-200 text-neutral-400"
    };
    let name = entry.name.clone();
    let label = format!("Remove {}", name);

    view! {
        <div class=format!(
            "{} hover:text-blue-600 hover:border-blue-600 hover:bg-blue-600 hover:bg-opacity-10 flex items-center border rounded-full px-3 py-2 cursor-pointer",
            tone
        )>
            <Avatar url=entry.image_url alt=entry.name.clone() class="rounded-full mr-2" />
            <p class="text-base font-medium text-neutral-800">{entry.name}</p>
            <button
                type="button"
                class="ml-1 text-current"
                aria-label=label
                on:click=move |_| on_remove.run(name.clone())
            >
                <svg class="h-4 w-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M18 6L6 18"/>
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 6L18 18"/>
                </svg>
            </button>
        </div>
    }
}

#[component]
fn DropdownRow(entry: Entry, on_pick: Callback<Entry>) -> impl IntoView {
    let picked = entry.clone();

    view! {
        <div
            class="flex items-center justify-between gap-4 p-4 py-2 hover:bg-neutral-100 cursor-pointer"
            on:click=move |_| on_pick.run(picked.clone())
        >
            <div class="flex items-center">
                <Avatar url=entry.image_url alt=entry.name.clone() class="rounded-full mr-3" />
                <p class="text-base font-medium text-neutral-800">{entry.name}</p>
            </div>
            <p class="text-xs font-medium text-neutral-400 ml-4 whitespace-nowrap text-ellipsis overflow-hidden">
                {entry.email}
            </p>
        </div>
    }
}
