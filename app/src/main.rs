// CSS Breakdown in the browser: router, shell and live playgrounds

#![recursion_limit = "256"]

use breakdown_core::SiteConfig;
use breakdown_pages::components::Shell;
use breakdown_pages::pages::{
    BasicsPage, FlexPage, GridPage, IntroPage, NotFound, SelectorsPage,
};
use breakdown_pages::styles::stylesheet;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let site = SiteConfig::default();
    let home = site.href(breakdown_core::Route::Intro);

    view! {
        <style>{stylesheet()}</style>
        <Router>
            <Shell site=site>
                <Routes fallback=move || view! { <NotFound home=home.clone() /> }>
                    <Route path=path!("/") view=IntroPage />
                    <Route path=path!("/intro") view=IntroPage />
                    <Route path=path!("/basics") view=BasicsPage />
                    <Route path=path!("/flex") view=FlexPage />
                    <Route path=path!("/grid") view=GridPage />
                    <Route path=path!("/selectors") view=SelectorsPage />
                </Routes>
            </Shell>
        </Router>
    }
}
