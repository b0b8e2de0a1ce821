// CSS Grid playground
use breakdown_core::{ControlSet, GridAction, GridControls};
use leptos::prelude::*;

use crate::components::{ChoiceSelect, Counter, CssSnippet, Preview, ResetButton};

#[component]
pub fn GridPage() -> impl IntoView {
    let state = RwSignal::new(GridControls::default());

    view! {
        <div class="demoPage gridPage">
            <aside class="controlPanel">
                <h2 class="title">"Grid Controls"</h2>

                <div class="explanation">
                    <p>
                        <strong>"CSS Grid"</strong>
                        " is a two-dimensional layout system for creating complex layouts with "
                        "rows and columns. Perfect for page layouts, image galleries, and "
                        "dashboard designs. Unlike Flexbox (one-dimensional), Grid excels at "
                        "controlling both axes simultaneously."
                    </p>
                </div>

                <Counter
                    state=state
                    label="Item Count"
                    description="Number of grid items in the container"
                    read=|c: &GridControls| c.item_count().to_string()
                    decrement=GridAction::DecrementItems
                    increment=GridAction::IncrementItems
                />
                <Counter
                    state=state
                    label="Columns"
                    description="Number of columns in the grid"
                    read=|c: &GridControls| c.columns.value().to_string()
                    decrement=GridAction::DecrementColumns
                    increment=GridAction::IncrementColumns
                />
                <ChoiceSelect
                    state=state
                    label="Rows"
                    description="Row sizing behavior"
                    read=|c: &GridControls| c.rows
                    set=GridAction::SetRows
                />
                <Counter
                    state=state
                    label="Column Gap"
                    description="Horizontal space between grid items"
                    read=|c: &GridControls| c.column_gap.css_value()
                    decrement=GridAction::DecrementColumnGap
                    increment=GridAction::IncrementColumnGap
                />
                <Counter
                    state=state
                    label="Row Gap"
                    description="Vertical space between grid items"
                    read=|c: &GridControls| c.row_gap.css_value()
                    decrement=GridAction::DecrementRowGap
                    increment=GridAction::IncrementRowGap
                />
                <ChoiceSelect
                    state=state
                    label="Auto Flow"
                    description="How auto-placed items flow into the grid"
                    read=|c: &GridControls| c.auto_flow
                    set=GridAction::SetAutoFlow
                />
                <ChoiceSelect
                    state=state
                    label="Justify Items"
                    description="Align items horizontally within their cells"
                    read=|c: &GridControls| c.justify_items
                    set=GridAction::SetJustifyItems
                />
                <ChoiceSelect
                    state=state
                    label="Align Items"
                    description="Align items vertically within their cells"
                    read=|c: &GridControls| c.align_items
                    set=GridAction::SetAlignItems
                />
                <ChoiceSelect
                    state=state
                    label="Justify Content"
                    description="Align entire grid horizontally in container"
                    read=|c: &GridControls| c.justify_content
                    set=GridAction::SetJustifyContent
                />
                <ChoiceSelect
                    state=state
                    label="Align Content"
                    description="Align entire grid vertically in container"
                    read=|c: &GridControls| c.align_content
                    set=GridAction::SetAlignContent
                />
                <ResetButton state=state action=GridAction::Reset />
            </aside>

            <div class="visualization">
                <Preview state=state />
                <CssSnippet state=state selector=".gridContainer" />
            </div>
        </div>
    }
}
