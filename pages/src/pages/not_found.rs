// Fallback for paths outside the route table
use leptos::prelude::*;

#[component]
pub fn NotFound(
    /// Href of the index page.
    #[prop(into)]
    home: String,
) -> impl IntoView {
    view! {
        <div class="notFound">
            <h1>"Page not found"</h1>
            <p>
                "Nothing lives at this address. "
                <a href=home>"Back to the intro"</a>
            </p>
        </div>
    }
}
