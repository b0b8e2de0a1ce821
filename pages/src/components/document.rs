//! Root document component - the complete HTML page for the static export.

use breakdown_core::{Route, SiteConfig};
use leptos::prelude::*;

use super::Shell;
use crate::pages::PageView;
use crate::styles::stylesheet;

/// A standalone page: head with title and inline stylesheet, body with the
/// shell around `route`'s page.
#[component]
pub fn Document(site: SiteConfig, route: Route) -> impl IntoView {
    let title = site.page_title(route);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>{title}</title>
                <style>{stylesheet()}</style>
            </head>
            <body>
                <Shell site=site active=route>
                    <PageView route=route />
                </Shell>
            </body>
        </html>
    }
}
