//! Live preview of a control set.

use breakdown_core::ControlSet;
use leptos::prelude::*;

/// The demo container, styled by the composite class name, holding
/// `item_count` numbered placeholders.
#[component]
pub fn Preview<C>(state: RwSignal<C>) -> impl IntoView
where
    C: ControlSet,
{
    view! {
        <div class=move || state.with(|controls| controls.container_class())>
            {move || {
                let (count, item_class) =
                    state.with(|controls| (controls.item_count(), controls.item_class()));
                (1..=count)
                    .map(|n| view! { <div class=item_class.clone()>{n}</div> })
                    .collect_view()
            }}
        </div>
    }
}

/// The CSS the current state amounts to.
#[component]
pub fn CssSnippet<C>(state: RwSignal<C>, selector: &'static str) -> impl IntoView
where
    C: ControlSet,
{
    view! {
        <div class="generatedCss">
            <h3>"Generated CSS"</h3>
            <pre class="cssSnippet">
                <code>{move || state.with(|controls| controls.css_snippet(selector))}</code>
            </pre>
        </div>
    }
}
