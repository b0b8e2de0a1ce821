// Flexbox playground
use breakdown_core::{ControlSet, FlexAction, FlexControls};
use leptos::prelude::*;

use crate::components::{ChoiceSelect, Counter, CssSnippet, Preview, ResetButton, Toggle};

#[component]
pub fn FlexPage() -> impl IntoView {
    let state = RwSignal::new(FlexControls::default());

    view! {
        <div class="demoPage flexPage">
            <aside class="controlPanel">
                <h2 class="title">"Flexbox Controls"</h2>

                <div class="explanation">
                    <p>
                        <strong>"Flexbox"</strong>
                        " is a one-dimensional layout system for distributing space along a row "
                        "or column. Perfect for navigation bars, card layouts, and centering "
                        "content. Caveat: use Grid for two-dimensional layouts."
                    </p>
                </div>

                <Counter
                    state=state
                    label="Item Count"
                    description="Number of flex items in the container"
                    read=|c: &FlexControls| c.item_count().to_string()
                    decrement=FlexAction::DecrementItems
                    increment=FlexAction::IncrementItems
                />
                <Counter
                    state=state
                    label="Gap"
                    description="Space between flex items"
                    read=|c: &FlexControls| c.gap.css_value()
                    decrement=FlexAction::DecrementGap
                    increment=FlexAction::IncrementGap
                />
                <Toggle
                    state=state
                    id="wrap"
                    label="Flex Wrap"
                    description="Allow items to wrap onto multiple lines"
                    toggle_label="Enable Wrap"
                    read=|c: &FlexControls| c.wrap
                    set=FlexAction::SetWrap
                />
                <ChoiceSelect
                    state=state
                    label="Flex Direction"
                    description="Main axis direction (row or column)"
                    read=|c: &FlexControls| c.direction
                    set=FlexAction::SetDirection
                />
                <ChoiceSelect
                    state=state
                    label="Justify Content"
                    description="Align items along the main axis"
                    read=|c: &FlexControls| c.justify_content
                    set=FlexAction::SetJustifyContent
                />
                <ChoiceSelect
                    state=state
                    label="Align Items"
                    description="Align items along the cross axis"
                    read=|c: &FlexControls| c.align_items
                    set=FlexAction::SetAlignItems
                />
                <Toggle
                    state=state
                    id="grow"
                    label="Flex Grow/Shrink"
                    description="Allow items to grow/shrink to fill space"
                    toggle_label="Enable"
                    read=|c: &FlexControls| c.grow
                    set=FlexAction::SetGrow
                />
                <ResetButton state=state action=FlexAction::Reset />
            </aside>

            <div class="visualization">
                <Preview state=state />
                <CssSnippet state=state selector=".flexContainer" />
            </div>
        </div>
    }
}
