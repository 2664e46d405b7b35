//! Terminal input component with autocompletion and history navigation.

use fauxsh_core::AutocompleteResult;
use leptos::prelude::CollectView;
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use super::hooks::TabCycleState;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Terminal input field with Tab completion and history recall.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    on_submit: Callback<String>,
    on_history_nav: Callback<i32, Option<String>>,
    on_autocomplete: Callback<String, AutocompleteResult>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (input_value, set_input_value) = signal(String::new());

    let tab_state = TabCycleState::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_tab = move |value: String| -> Option<String> {
        if value.is_empty() {
            return None;
        }

        if tab_state.is_active() {
            tab_state.advance();
            return tab_state.build_completion();
        }

        match on_autocomplete.run(value.clone()) {
            AutocompleteResult::Single(completed) => Some(completed),
            AutocompleteResult::Multiple(common, matches) => {
                tab_state.start(common.clone(), matches);
                if common.len() > value.len() {
                    Some(common)
                } else {
                    tab_state.build_completion()
                }
            }
            AutocompleteResult::None => None,
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Tab" => {
            ev.prevent_default();
            if let Some(completed) = handle_tab(input_value.get()) {
                set_input_value.set(completed);
                move_cursor_to_end();
            }
        }
        "Enter" => {
            tab_state.clear();
            on_submit.run(input_value.get());
            set_input_value.set(String::new());
        }
        "ArrowUp" => {
            ev.prevent_default();
            tab_state.clear();
            if let Some(cmd) = on_history_nav.run(-1) {
                set_input_value.set(cmd);
                move_cursor_to_end();
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            tab_state.clear();
            set_input_value.set(on_history_nav.run(1).unwrap_or_default());
        }
        "c" if ev.ctrl_key() => {
            tab_state.clear();
            set_input_value.set(String::new());
        }
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            tab_state.clear();
            on_submit.run("clear".to_string());
        }
        _ => tab_state.clear(),
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_input_value.set(input.value());
        tab_state.clear();
    };

    let suggestions_view = move || {
        let matches = tab_state.matches.get();
        let idx = tab_state.index.get();
        (!matches.is_empty()).then(|| {
            view! {
                <div class=css::suggestions>
                    {matches.into_iter().enumerate().map(|(i, s)| {
                        let class_name = if i == idx {
                            format!("{} {}", css::suggestion, css::suggestionActive)
                        } else {
                            css::suggestion.to_string()
                        };
                        view! { <span class=class_name>{s}</span> }
                    }).collect_view()}
                </div>
            }
        })
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::prompt>{prompt}</span>
                <span class=css::separator>"$ "</span>
                <input
                    node_ref=input_ref
                    type="text"
                    class=css::input
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=input_value
                    on:input=handle_input
                    on:keydown=handle_keydown
                />
            </div>

            {suggestions_view}
        </div>
    }
}
