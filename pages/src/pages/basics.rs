// Units, box model and positioning
use leptos::prelude::*;

#[component]
pub fn BasicsPage() -> impl IntoView {
    view! {
        <div class="container">
            <h1 class="header">"CSS Basics"</h1>
            <Units />
            <BoxModel />
            <Positioning />
        </div>
    }
}

#[component]
fn Units() -> impl IntoView {
    view! {
        <section class="section">
            <h2 class="title heading">"Units"</h2>
            <div class="separator"></div>
            <div id="absoluteUnits">
                <p>"Learn about different CSS units like px, em, rem, %, vw, vh, etc."</p>
                <h3 class="heading">"Absolute Units"</h3>
                <p>"Useful for printing, not so much for sizing element's on screen"</p>
                <div class="horizontal">
                    <UnitBox id="pixels" text="Pixels (1px)" />
                    <UnitBox id="points" text="Points (1pt)" />
                    <UnitBox id="inches" text="Inches (1in)" />
                    <UnitBox id="centimeters" text="Centimeters (1cm)" />
                </div>
            </div>

            <div id="relativeUnits">
                <h3 class="heading">"Relative Units"</h3>
                <div class="horizontal">
                    <UnitBox
                        id="ems"
                        text="Ems (1em) Relative to this element or its parent's font-size"
                    />
                    <UnitBox id="rems" text="Rems (1rem) Relative to the :root element's font-size" />
                    <UnitBox id="percentages" text="Percentages (25% element's height)" />
                    <UnitBox id="viewportWidth" text="Viewport Width (1vw) 1% of viewport's width" />
                    <UnitBox
                        id="viewportHeight"
                        text="Viewport Height (1vh) 1% of viewport's height"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn UnitBox(id: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div id=id>
            <p>{text}</p>
        </div>
    }
}

#[component]
fn BoxModel() -> impl IntoView {
    view! {
        <section class="section" id="boxmodel">
            <h2 class="heading">"Box Model"</h2>
            <div class="separator"></div>
            <div class="horizontal">
                <p>
                    "Understand the CSS box model including content, padding, border, and margin."
                </p>
                <div id="boxesContainer">
                    <div id="marginContainer">
                        <Layer
                            id="margin"
                            title="Margin: Transparent"
                            text="Space between element and its neighbors, displaces surrounding elements in unpredictable ways"
                        />
                    </div>
                    <Layer
                        id="border"
                        title="Border: Yellow"
                        text="Sits between margin and padding, affects element's size"
                    />
                    <Layer
                        id="padding"
                        title="Padding: Green"
                        text="Space between border and element's content, displaces surrounding elements intuitively"
                    />
                    <Layer id="outline" title="Outline: Red" text="Does not affect element's size" />
                </div>
            </div>
        </section>
    }
}

/// One box-model layer: bold title, separator, explanation.
#[component]
fn Layer(id: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div id=id>
            <p class="bold">{title}</p>
            <div class="separator"></div>
            {text}
        </div>
    }
}

#[component]
fn Positioning() -> impl IntoView {
    view! {
        <section class="section" id="positioning">
            <h2 class="heading">"Positioning"</h2>
            <div class="separator"></div>
            <p>
                "Explore CSS positioning techniques: static, relative, absolute, fixed, and "
                "sticky (hover over each element to see positioning effect)."
            </p>
            <div class="horizontal positioningExamples">
                <div id="static">
                    <p class="bold">"Static:"</p>
                    <div class="separator"></div>
                    <p>
                        "Default positioning; elements flow naturally in the document, "
                        "top/left/right/bottom have no effect."
                    </p>
                </div>
                <div id="relative">
                    <p class="bold">"Relative:"</p>
                    <div class="separator"></div>
                    <p>
                        "Positioned relative to its normal position; offsets don't affect "
                        "other elements, creates positioning context."
                    </p>
                </div>
                <div id="absolute">
                    <span>
                        <p class="bold">"Absolute:"</p>
                        <div class="separator"></div>
                        "Removed from document flow; positioned relative to nearest "
                        "positioned ancestor, doesn't affect sibling layout"
                    </span>
                </div>
                <div id="fixed">
                    <p class="bold">"Fixed:"</p>
                    <div class="separator"></div>
                    <p>
                        "Removed from document flow; positioned relative to viewport, stays "
                        "in place when scrolling"
                    </p>
                </div>
                <div id="sticky">
                    <p class="bold">"Sticky:"</p>
                    <div class="separator"></div>
                    <p>
                        "Hybrid of relative and fixed; acts relative until scroll threshold, "
                        "then \"sticks\" to specified position."
                    </p>
                    <p>
                        "Scrolling element needs explicit height and content needs a scroll "
                        "threshold, usually defined with \"top\" property."
                    </p>
                    {(0..8).map(|_| view! { <p>"Lorem ipsum"</p> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
