//! Shared chrome around every page: title, navigation, footer.

use breakdown_core::{Route, SiteConfig};
use leptos::prelude::*;

/// Header, `<main>` outlet and footer.
///
/// Links are plain anchors: the browser build wraps the shell in a router,
/// which intercepts them for client-side navigation; the static export
/// serves them as ordinary pages.
#[component]
pub fn Shell(
    site: SiteConfig,
    /// Page whose link is marked current, when known up front.
    #[prop(optional)]
    active: Option<Route>,
    children: Children,
) -> impl IntoView {
    view! {
        <div id="app">
            <Header site=site.clone() active=active />
            <main>{children()}</main>
            <Footer text=site.footer.clone() />
        </div>
    }
}

#[component]
fn Header(site: SiteConfig, active: Option<Route>) -> impl IntoView {
    view! {
        <header>
            <a href=site.href(Route::Intro) class="appTitle">
                <h2>{site.title.clone()}</h2>
            </a>
            <nav id="routesContainer">
                {Route::NAV
                    .into_iter()
                    .map(|route| {
                        let current = (active == Some(route)).then_some("page");
                        view! {
                            <a
                                class=format!("{}Link", route.label().to_lowercase())
                                href=site.href(route)
                                aria-current=current
                            >
                                {route.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}

#[component]
fn Footer(text: String) -> impl IntoView {
    view! {
        <footer>
            <span>{text}</span>
        </footer>
    }
}
