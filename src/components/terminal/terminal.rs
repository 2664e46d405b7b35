//! Terminal view component.
//!
//! The terminal interface with output history and command input.

use fauxsh_core::{AutocompleteResult, OutputLine, autocomplete, console};
use leptos::prelude::*;

use crate::app::{AppContext, TerminalState};
use crate::components::terminal::{Input, Output};
use crate::utils::{BrowserNetwork, dom};

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Effect Setup
// ============================================================================

/// Auto-scroll output to bottom when history changes.
fn setup_autoscroll_effect(terminal: TerminalState, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        terminal.history.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let output_ref = NodeRef::<leptos::html::Div>::new();

    let prompt = Signal::derive(move || ctx.get_prompt());

    let on_submit = create_submit_callback(ctx);
    let on_history_nav = create_history_nav_callback(ctx);
    let on_autocomplete = create_autocomplete_callback(ctx);

    setup_autoscroll_effect(ctx.terminal, output_ref);

    let history_signal = ctx.terminal.history;
    let running = ctx.terminal.running;

    view! {
        <div class=css::container on:click=move |_| dom::focus_terminal_input()>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || history_signal.get().to_vec()
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
            </div>

            <Show when=move || !running.get() fallback=|| ()>
                <div class=css::inputArea>
                    <Input
                        prompt=prompt
                        on_submit=on_submit
                        on_history_nav=on_history_nav
                        on_autocomplete=on_autocomplete
                    />
                </div>
            </Show>
        </div>
    }
}

// ============================================================================
// Callback Factories
// ============================================================================

/// Echo the line, then run it to completion in the background.
///
/// The session is taken out of its signal for the duration of the command
/// and written back when it finishes.
fn create_submit_callback(ctx: AppContext) -> Callback<String> {
    Callback::new(move |input: String| {
        let mut terminal = ctx.terminal;

        if !input.trim().is_empty() {
            terminal.push_output(OutputLine::command(ctx.get_prompt(), &input));
            terminal.add_to_command_history(&input);
        }

        let interpreter = ctx.interpreter.get_value();
        let mut session = terminal.session.get_untracked();
        terminal.running.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            let result = interpreter
                .execute(&input, &mut session, &mut terminal, &BrowserNetwork)
                .await;

            terminal.session.set(session);
            terminal.running.set(false);

            if let Some(intent) = result.navigate_to {
                console::log(&format!("navigating to {}", intent.url));
                dom::navigate(&intent.url);
            }
        });
    })
}

fn create_history_nav_callback(ctx: AppContext) -> Callback<i32, Option<String>> {
    Callback::new(move |direction: i32| ctx.terminal.navigate_history(direction))
}

fn create_autocomplete_callback(ctx: AppContext) -> Callback<String, AutocompleteResult> {
    Callback::new(move |input: String| {
        let interpreter = ctx.interpreter.get_value();
        ctx.terminal.session.with(|session| {
            autocomplete(
                &input,
                session.current_dir(),
                interpreter.fs(),
                interpreter.registry(),
            )
        })
    })
}
