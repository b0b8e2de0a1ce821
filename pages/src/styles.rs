//! CSS for the site.
//!
//! The stylesheet has two halves:
//!
//! - [`BASE_CSS`] - chrome, lesson pages and the control panel
//! - generated rules, one per class token a control set can emit, built
//!   from the same lookup tables the class names come from
//!
//! Demo rules are scoped by the container class, so `alignItems_center`
//! means one thing under `.flexContainer` and another under `.gridContainer`
//! without colliding.
//!
//! ```rust
//! use breakdown_pages::styles::stylesheet;
//!
//! let css = stylesheet();
//! assert!(css.contains(".flexContainer.row_reverse { flex-direction: row-reverse; }"));
//! ```

use breakdown_core::controls::{Choice, Gap};
use breakdown_core::flex::{self, FLEX_CONTAINER, FLEX_ITEM, FlexAlign, FlexDirection, FlexJustify};
use breakdown_core::grid::{
    self, AlignContent, AlignItems, AutoFlow, GRID_CONTAINER, JustifyContent, JustifyItems,
    RowSizing,
};

/// Layout chrome, lesson pages and control panel.
pub const BASE_CSS: &str = r#"
:root {
    --bg: #0f1115;
    --bg-raised: #171a21;
    --bg-panel: #1d212a;
    --text: #e6e6e6;
    --text-dim: #9aa0aa;
    --accent: #4f81e1;
    --accent-soft: rgba(79, 129, 225, 0.18);
    --border: rgba(230, 230, 230, 0.12);
    --item: #e67e22;
    --item-text: #111;
    --font: 'Inter', system-ui, -apple-system, sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    min-height: 100vh;
    font-family: var(--font);
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
}

a {
    color: var(--accent);
}

code {
    font-family: var(--font-mono);
    font-size: 0.9em;
}

.bold {
    font-weight: 700;
}

/* Shell */

#app {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
}

header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding: 0 2rem;
    background: var(--bg-raised);
    border-bottom: 1px solid var(--border);
}

.appTitle {
    color: var(--text);
    text-decoration: none;
}

#routesContainer {
    display: flex;
    gap: 1.5rem;
}

#routesContainer a {
    color: var(--text-dim);
    text-decoration: none;
    font-weight: 600;
}

#routesContainer a:hover,
#routesContainer a:focus,
#routesContainer a[aria-current="page"] {
    color: var(--text);
}

main {
    flex: 1;
    padding: 2rem;
}

footer {
    padding: 1rem 2rem;
    color: var(--text-dim);
    border-top: 1px solid var(--border);
    text-align: center;
}

/* Lessons */

#introContainer,
.container,
.selectorsSection {
    max-width: 960px;
    margin: 0 auto;
}

.title,
.heading {
    margin-top: 2rem;
}

.paragraph {
    color: var(--text-dim);
}

.conclusion {
    color: var(--text);
    font-style: italic;
}

.section {
    margin-bottom: 3rem;
}

.separator {
    height: 1px;
    margin: 0.5rem 0 1rem;
    background: var(--border);
}

.horizontal {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    align-items: flex-start;
}

.horizontal > div,
.horizontal > p {
    padding: 0.75rem;
    background: var(--bg-panel);
    border-radius: 0.5rem;
}

#pixels { width: 160px; }
#points { width: 120pt; }
#inches { width: 1.75in; }
#centimeters { width: 4.5cm; }
#ems { font-size: 1.1em; width: 9em; }
#rems { width: 11rem; }
#relativeUnits .horizontal { height: 14rem; }
#percentages { height: 25%; overflow: hidden; }
#viewportWidth { width: 15vw; min-width: 8rem; }
#viewportHeight { height: 20vh; }

#boxesContainer {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
}

#marginContainer {
    border: 1px dashed var(--text-dim);
}

#margin {
    margin: 1.5rem;
}

#border {
    border: 8px solid #e5c07b;
}

#padding {
    padding: 1.5rem;
    background: #2f6f4f;
}

#outline {
    outline: 4px solid #dc2626;
    outline-offset: 4px;
}

.positioningExamples > div {
    width: 180px;
    min-height: 180px;
    transition: transform 0.2s;
}

#relative:hover {
    position: relative;
    top: 12px;
    left: 12px;
}

#absolute {
    position: relative;
}

#absolute:hover span {
    position: absolute;
    top: -1rem;
    left: 2rem;
    background: var(--bg-raised);
    padding: 0.5rem;
}

#fixed:hover {
    position: fixed;
    right: 1rem;
    bottom: 1rem;
    z-index: 10;
}

#sticky {
    height: 220px;
    overflow-y: auto;
}

#sticky > p.bold {
    position: sticky;
    top: 0;
    background: var(--bg-panel);
}

.selectorBlock,
.quickReference,
.bestPractices,
.intro {
    margin-bottom: 2.5rem;
}

.selectorItem {
    padding: 1rem 1.25rem;
    margin: 1rem 0;
    background: var(--bg-raised);
    border-radius: 0.5rem;
}

.codeExample {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 1rem;
}

.codeExample code {
    display: block;
    white-space: pre;
    overflow-x: auto;
    padding: 1rem;
    background: var(--bg);
    border-radius: 0.5rem;
    border-left: 3px solid var(--accent);
}

.codeExample code.markup {
    border-left-color: var(--item);
}

.explanation,
.blockIntro {
    color: var(--text-dim);
}

.practical {
    padding: 0.5rem 0.75rem;
    background: var(--accent-soft);
    border-radius: 0.25rem;
}

.referenceTable {
    width: 100%;
    border-collapse: collapse;
}

.referenceTable th,
.referenceTable td {
    padding: 0.5rem;
    text-align: left;
    border-bottom: 1px solid var(--border);
}

.bestPractices ul {
    list-style: none;
    padding-left: 0;
}

/* Playgrounds */

.demoPage {
    display: grid;
    grid-template-columns: minmax(260px, 340px) 1fr;
    gap: 2rem;
    align-items: start;
}

.controlPanel {
    padding: 1.25rem;
    background: var(--bg-raised);
    border-radius: 0.75rem;
}

.control {
    padding: 0.75rem 0;
    border-top: 1px solid var(--border);
}

.control > label {
    font-weight: 600;
}

.description {
    margin: 0.25rem 0 0.5rem;
    font-size: 0.85rem;
    color: var(--text-dim);
}

.counter {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.counter button,
.resetButton {
    min-width: 2rem;
    padding: 0.25rem 0.5rem;
    color: var(--text);
    background: var(--bg-panel);
    border: 1px solid var(--border);
    border-radius: 0.25rem;
    cursor: pointer;
}

.counter button:hover,
.counter button:focus,
.resetButton:hover,
.resetButton:focus {
    border-color: var(--accent);
}

.toggle {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.select {
    width: 100%;
    padding: 0.35rem;
    color: var(--text);
    background: var(--bg-panel);
    border: 1px solid var(--border);
    border-radius: 0.25rem;
}

.visualization {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.flexContainer,
.gridContainer {
    min-height: 420px;
    padding: 1rem;
    background: var(--bg-raised);
    border: 2px dashed var(--border);
    border-radius: 0.75rem;
}

.flexContainer {
    display: flex;
}

.gridContainer {
    display: grid;
}

.flexItem,
.gridItem {
    display: flex;
    align-items: center;
    justify-content: center;
    min-width: 60px;
    min-height: 60px;
    padding: 0.5rem 1rem;
    font-weight: 700;
    color: var(--item-text);
    background: var(--item);
    border-radius: 0.5rem;
}

.flexItem:nth-child(3n + 2),
.gridItem:nth-child(3n + 2) {
    padding-top: 1.25rem;
}

.flexItem:nth-child(3n),
.gridItem:nth-child(3n) {
    font-size: 1.25rem;
}

.cssSnippet {
    margin: 0;
    padding: 1rem;
    background: var(--bg);
    border: 1px solid var(--border);
    border-radius: 0.5rem;
    overflow-x: auto;
}

.notFound {
    text-align: center;
}

@media (max-width: 800px) {
    .demoPage {
        grid-template-columns: 1fr;
    }

    header {
        flex-direction: column;
        padding: 1rem;
    }
}
"#;

fn rule(out: &mut String, scope: &str, token: &str, declaration: &str) {
    out.push_str(&format!(".{scope}.{token} {{ {declaration}; }}\n"));
}

fn choice_rules<T: Choice>(out: &mut String, scope: &str) {
    for choice in T::ALL {
        rule(out, scope, &choice.token(), &choice.declaration());
    }
}

/// One rule per token [`breakdown_core::FlexControls`] can emit.
pub fn flex_rules() -> String {
    let mut out = String::new();
    for gap in Gap::all() {
        rule(
            &mut out,
            FLEX_CONTAINER,
            &format!("gap{}", gap.token()),
            &format!("gap: {}", gap.css_value()),
        );
    }
    choice_rules::<FlexDirection>(&mut out, FLEX_CONTAINER);
    rule(&mut out, FLEX_CONTAINER, flex::WRAP, "flex-wrap: wrap");
    rule(&mut out, FLEX_CONTAINER, flex::NOWRAP, "flex-wrap: nowrap");
    choice_rules::<FlexJustify>(&mut out, FLEX_CONTAINER);
    choice_rules::<FlexAlign>(&mut out, FLEX_CONTAINER);
    rule(&mut out, FLEX_ITEM, flex::GROW, "flex: 1 1 auto");
    out
}

/// One rule per token [`breakdown_core::GridControls`] can emit.
pub fn grid_rules() -> String {
    let mut out = String::new();
    for gap in Gap::all() {
        let length = gap.css_value();
        rule(
            &mut out,
            GRID_CONTAINER,
            &format!("columnGap{}", gap.token()),
            &format!("column-gap: {length}"),
        );
        rule(
            &mut out,
            GRID_CONTAINER,
            &format!("rowGap{}", gap.token()),
            &format!("row-gap: {length}"),
        );
    }
    for columns in grid::MIN_COLUMNS..=grid::MAX_COLUMNS {
        rule(
            &mut out,
            GRID_CONTAINER,
            &grid::columns_token(columns),
            &grid::columns_declaration(columns),
        );
    }
    choice_rules::<RowSizing>(&mut out, GRID_CONTAINER);
    choice_rules::<AutoFlow>(&mut out, GRID_CONTAINER);
    choice_rules::<JustifyItems>(&mut out, GRID_CONTAINER);
    choice_rules::<AlignItems>(&mut out, GRID_CONTAINER);
    choice_rules::<JustifyContent>(&mut out, GRID_CONTAINER);
    choice_rules::<AlignContent>(&mut out, GRID_CONTAINER);
    out
}

/// The complete stylesheet.
pub fn stylesheet() -> String {
    let mut css = String::from(BASE_CSS);
    css.push_str("\n/* Flexbox tokens */\n");
    css.push_str(&flex_rules());
    css.push_str("\n/* Grid tokens */\n");
    css.push_str(&grid_rules());
    css
}
