use fauxsh_core::{OutputLine, OutputLineData};
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    match line.data {
        OutputLineData::Command { prompt, input } => view! {
            <div class=css::command>
                <span class=css::textGreen>{prompt}</span>
                <span class=css::textDim>"$ "</span>
                <span class=css::textFg>{input}</span>
            </div>
        }
        .into_any(),
        OutputLineData::Text(text) => view! {
            <div class=format!("{} {}", css::line, css::textFg)>{text}</div>
        }
        .into_any(),
        OutputLineData::Error(text) => view! {
            <div class=format!("{} {}", css::line, css::textRed)>{text}</div>
        }
        .into_any(),
        // Markup comes from bundled site content only
        OutputLineData::Markup(html) => view! {
            <div class=css::markup inner_html=html></div>
        }
        .into_any(),
        OutputLineData::Image(src) => view! {
            <img class=css::image src=src alt="" />
        }
        .into_any(),
    }
}
