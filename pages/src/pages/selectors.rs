// Selector lesson: basic selectors, pseudo-classes, pseudo-elements,
// combinators, nesting, quick reference.
use leptos::prelude::*;

const ELEMENT_CSS: &str = r#"/* Styles ALL buttons */
button {
    padding: 1rem;
    border-radius: 0.5rem;
}"#;

const ELEMENT_MARKUP: &str = r#"<!-- No special syntax needed -->
<button>Click me</button>"#;

const CLASS_CSS: &str = r#"/* Targets elements with class="button" */
.button {
    background: blue;
    color: white;
}

/* Multiple classes work together */
.button.primary {
    background: darkblue;
}"#;

const CLASS_MARKUP: &str = r#"<!-- Space-separated list of classes -->
<button class="button">Normal</button>
<button class="button primary">Primary</button>"#;

const ID_CSS: &str = r#"/* Only one element should have id="header" */
#header {
    position: fixed;
    top: 0;
    width: 100%;
}"#;

const ID_MARKUP: &str = r#"<header id="header">
    <nav>...</nav>
</header>"#;

const STATES_CSS: &str = r#"/* Hover effect */
.button:hover {
    background: lightblue;
    transform: scale(1.05);
}

/* When clicked/focused */
.button:active {
    transform: scale(0.95);
}

/* Keyboard focus */
.input:focus {
    outline: 2px solid blue;
}

/* Disabled state */
.button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}"#;

const POSITIONAL_CSS: &str = r#"/* First child */
.list-item:first-child {
    border-top: none;
}

/* Last child */
.list-item:last-child {
    border-bottom: none;
}

/* Every other item (striping)
   Options: odd, even, 2n, 2n+1, 3n, etc. */
.table-row:nth-child(even) {
    background: #f5f5f5;
}

/* Specific position */
.item:nth-child(3) {
    color: red;
}"#;

const PSEUDO_ELEMENTS_CSS: &str = r#"/* First letter of paragraph */
.intro::first-letter {
    font-size: 2em;
    font-weight: bold;
}

/* First line */
.paragraph::first-line {
    font-weight: bold;
}

/* Insert content before/after */
.link::before {
    content: "🔗 ";
}

.external-link::after {
    content: " ↗";
}

/* Decorative elements without HTML */
.card::before {
    content: "";
    position: absolute;
    top: 0;
    left: 0;
    width: 4px;
    height: 100%;
    background: blue;
}"#;

const DESCENDANT_CSS: &str = r#"/* ALL paragraphs inside .card (any level deep) */
.card p {
    color: gray;
}"#;

const DESCENDANT_MARKUP: &str = r#"<div class="card">
    <p>Styled ✓</p>
    <div>
        <p>Also styled ✓</p>
    </div>
</div>"#;

const CHILD_CSS: &str = r#"/* ONLY direct children paragraphs */
.card > p {
    color: gray;
}"#;

const CHILD_MARKUP: &str = r#"<div class="card">
    <p>Styled ✓</p>
    <div>
        <p>NOT styled ✗</p>
    </div>
</div>"#;

const ADJACENT_CSS: &str = r#"/* Paragraph immediately after h2 */
h2 + p {
    font-size: 1.2em;
    color: gray;
}"#;

const ADJACENT_MARKUP: &str = r#"<h2>Title</h2>
<p>This is styled ✓</p>
<p>This is NOT ✗</p>"#;

const GENERAL_SIBLING_CSS: &str = r#"/* ALL paragraphs after h2 (same parent) */
h2 ~ p {
    margin-left: 1rem;
}"#;

const GENERAL_SIBLING_MARKUP: &str = r#"<h2>Title</h2>
<p>Styled ✓</p>
<p>Also styled ✓</p>
<div>
    <p>NOT styled (different parent) ✗</p>
</div>"#;

const NESTING_CSS: &str = r#"/* Traditional way */
.button { background: blue; }
.button:hover { background: darkblue; }
.button.primary { background: green; }
.button .icon { margin-right: 0.5rem; }

/* Nested way (modern CSS) */
.button {
    background: blue;

    /* & = .button */
    &:hover {
        background: darkblue;
    }

    /* .button.primary */
    &.primary {
        background: green;
    }

    /* .button .icon */
    & .icon {
        margin-right: 0.5rem;
    }

    /* .button > span */
    & > span {
        font-weight: bold;
    }
}"#;

/// Selector, what it targets, example.
const QUICK_REFERENCE: [(&str, &str, &str); 10] = [
    ("element", "All elements of that type", "button"),
    (".class", "Elements with that class", ".button"),
    ("#id", "Element with that ID", "#header"),
    (":hover", "Element being hovered", ".link:hover"),
    ("::before", "Insert before content", ".icon::before"),
    ("A B", "B inside A (any depth)", ".card p"),
    ("A > B", "B directly inside A", ".card > p"),
    ("A + B", "B immediately after A", "h2 + p"),
    ("A ~ B", "All B after A (siblings)", "h2 ~ p"),
    ("&", "Parent selector (nesting)", "&:hover"),
];

#[component]
pub fn SelectorsPage() -> impl IntoView {
    view! {
        <div class="selectorsSection">
            <h1>"CSS Selectors"</h1>

            <div class="intro">
                <p>
                    "Selectors are how you "
                    <strong>"target"</strong>
                    " HTML elements to apply styles. Think of them as addresses that tell CSS "
                    "which elements to style."
                </p>
                <p>
                    "When multiple selectors target the same element, CSS uses "
                    <strong>"specificity"</strong>
                    " to determine which styles win. Think of it as a scoring system: IDs "
                    "score highest (100 points), classes/pseudo-classes score medium (10 "
                    "points), and element selectors score lowest (1 point). The selector with "
                    "the highest score gets applied. If scores tie, the last one in your CSS "
                    "wins."
                </p>
                <p>
                    "The "
                    <strong>
                        <code>"!important"</code>
                    </strong>
                    " flag overrides all specificity rules, forcing a style to apply "
                    "regardless of selector strength. While powerful, it breaks the natural "
                    "cascade and makes debugging difficult. Use it sparingly, typically only "
                    "when overriding third-party styles you can't modify."
                </p>
                <p>
                    <a href="#quickReference" id="quickReferenceLink">
                        "Jump to Quick Reference →"
                    </a>
                </p>
            </div>

            <div class="selectorBlock">
                <h2>"Basic Selectors"</h2>

                <SelectorItem
                    heading="Element Selector"
                    explanation="Target all elements of a specific type. Use this for baseline styles."
                    css=ELEMENT_CSS
                    markup=ELEMENT_MARKUP
                >
                    <strong>"When to use:"</strong>
                    " Setting default styles for all headings, paragraphs, or links across your site."
                </SelectorItem>

                <SelectorItem
                    heading="Class Selector (.className)"
                    explanation="Target elements by class. Reusable across multiple elements. Your most-used selector."
                    css=CLASS_CSS
                    markup=CLASS_MARKUP
                >
                    <strong>"When to use:"</strong>
                    " Creating reusable component styles. Prefix or scope class names to avoid "
                    "naming conflicts."
                </SelectorItem>

                <SelectorItem
                    heading="ID Selector (#idName)"
                    explanation="Target a single unique element. IDs must be unique per page. Higher specificity than classes."
                    css=ID_CSS
                    markup=ID_MARKUP
                >
                    <strong>"When to use:"</strong>
                    " Targeting unique page landmarks (header, footer, main navigation) or "
                    "JavaScript anchors. Prefer classes for styling."
                </SelectorItem>
            </div>

            <div class="selectorBlock">
                <h2>"Pseudo-Classes (:state)"</h2>
                <p class="blockIntro">
                    "Target elements in specific "
                    <strong>"states"</strong>
                    " or "
                    <strong>"positions"</strong>
                    ". No extra HTML needed."
                </p>

                <SelectorItem heading="Interactive States" css=STATES_CSS>
                    <strong>"Action:"</strong>
                    " Add "
                    <code>":hover"</code>
                    " to all interactive elements for user feedback. Always style "
                    <code>":focus"</code>
                    " for accessibility."
                </SelectorItem>

                <SelectorItem heading="Positional Pseudo-Classes" css=POSITIONAL_CSS>
                    <strong>"Action:"</strong>
                    " Use "
                    <code>":nth-child(even/odd)"</code>
                    " for table striping. Use "
                    <code>":first-child/:last-child"</code>
                    " to remove unwanted borders/margins."
                </SelectorItem>
            </div>

            <div class="selectorBlock">
                <h2>"Pseudo-Elements (::element)"</h2>
                <p class="blockIntro">
                    "Style specific "
                    <strong>"parts"</strong>
                    " of an element or insert "
                    <strong>"generated content"</strong>
                    ". Uses "
                    <code>"::"</code>
                    " (double colon)."
                </p>

                <SelectorItem css=PSEUDO_ELEMENTS_CSS>
                    <strong>"Action:"</strong>
                    " Use "
                    <code>"::before/::after"</code>
                    " to add icons, decorative elements, or indicators without cluttering your "
                    "HTML. Set "
                    <code>"content: \"\""</code>
                    " for purely visual elements."
                </SelectorItem>
            </div>

            <div class="selectorBlock">
                <h2>"Combinators (Relationships)"</h2>
                <p class="blockIntro">
                    "Target elements based on their "
                    <strong>"relationship"</strong>
                    " to other elements in the DOM tree."
                </p>

                <SelectorItem heading="Descendant (Space)" css=DESCENDANT_CSS markup=DESCENDANT_MARKUP>
                    <strong>"When to use:"</strong>
                    " Styling all elements of a type within a component, regardless of nesting "
                    "depth."
                </SelectorItem>

                <SelectorItem heading="Direct Child (>)" css=CHILD_CSS markup=CHILD_MARKUP>
                    <strong>"When to use:"</strong>
                    " Preventing styles from leaking into nested components. More specific than "
                    "descendant selector."
                </SelectorItem>

                <SelectorItem heading="Adjacent Sibling (+)" css=ADJACENT_CSS markup=ADJACENT_MARKUP>
                    <strong>"When to use:"</strong>
                    " Styling the first paragraph after a heading differently (intro text). "
                    "Adding spacing between specific adjacent elements."
                </SelectorItem>

                <SelectorItem
                    heading="General Sibling (~)"
                    css=GENERAL_SIBLING_CSS
                    markup=GENERAL_SIBLING_MARKUP
                >
                    <strong>"When to use:"</strong>
                    " Styling all siblings that follow a specific element, like indenting all "
                    "content after a heading."
                </SelectorItem>
            </div>

            <div class="selectorBlock">
                <h2>"Nested Selectors (CSS Nesting)"</h2>
                <p class="blockIntro">
                    "Modern CSS allows "
                    <strong>"nesting"</strong>
                    " (similar to SCSS). Use "
                    <code>"&"</code>
                    " to reference the parent selector."
                </p>

                <SelectorItem css=NESTING_CSS>
                    <strong>"Action:"</strong>
                    " Use nesting to keep related styles together. The "
                    <code>"&"</code>
                    " symbol represents the parent selector. Especially useful when class names "
                    "are already scoped to a component."
                </SelectorItem>
            </div>

            <div class="quickReference" id="quickReference">
                <h2>"Quick Reference"</h2>
                <table class="referenceTable">
                    <thead>
                        <tr>
                            <th>"Selector"</th>
                            <th>"Targets"</th>
                            <th>"Example"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {QUICK_REFERENCE
                            .iter()
                            .map(|(selector, targets, example)| {
                                view! {
                                    <tr>
                                        <td>
                                            <code>{*selector}</code>
                                        </td>
                                        <td>{*targets}</td>
                                        <td>
                                            <code>{*example}</code>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="bestPractices">
                <h2>"Best Practices"</h2>
                <ul>
                    <li>
                        "✓ "
                        <strong>"Prefer classes over IDs"</strong>
                        " for styling (better reusability, lower specificity)"
                    </li>
                    <li>
                        "✓ "
                        <strong>"Scope your class names"</strong>
                        " per component to avoid global namespace pollution"
                    </li>
                    <li>
                        "✓ "
                        <strong>"Keep selectors shallow"</strong>
                        " (max 2-3 levels) for better performance and maintainability"
                    </li>
                    <li>
                        "✓ "
                        <strong>"Always style :focus"</strong>
                        " for keyboard navigation accessibility"
                    </li>
                    <li>
                        "✓ "
                        <strong>"Use :hover with :focus"</strong>
                        " so effects work for both mouse and keyboard users"
                    </li>
                    <li>
                        "✗ "
                        <strong>"Avoid !important"</strong>
                        " unless overriding third-party styles"
                    </li>
                    <li>
                        "✗ "
                        <strong>"Don't use inline styles"</strong>
                        " in markup (use classes instead)"
                    </li>
                </ul>
            </div>
        </div>
    }
}

/// One selector: optional heading and explanation, the CSS, optionally the
/// markup it matches, then the practical note passed as children.
#[component]
fn SelectorItem(
    #[prop(optional)] heading: Option<&'static str>,
    #[prop(optional)] explanation: Option<&'static str>,
    css: &'static str,
    #[prop(optional)] markup: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="selectorItem">
            {heading.map(|heading| view! { <h3>{heading}</h3> })}
            {explanation.map(|text| view! { <p class="explanation">{text}</p> })}
            <div class="codeExample">
                <code class="css">{css}</code>
                {markup.map(|markup| view! { <code class="markup">{markup}</code> })}
            </div>
            <p class="practical">{children()}</p>
        </div>
    }
}
