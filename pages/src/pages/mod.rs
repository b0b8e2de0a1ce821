//! One component per route.

mod basics;
mod flex;
mod grid;
mod intro;
mod not_found;
mod selectors;

use breakdown_core::Route;
use leptos::prelude::*;

pub use basics::BasicsPage;
pub use flex::FlexPage;
pub use grid::GridPage;
pub use intro::IntroPage;
pub use not_found::NotFound;
pub use selectors::SelectorsPage;

/// The page mounted at `route`.
#[component]
pub fn PageView(route: Route) -> impl IntoView {
    match route {
        Route::Intro => view! { <IntroPage /> }.into_any(),
        Route::Basics => view! { <BasicsPage /> }.into_any(),
        Route::Flex => view! { <FlexPage /> }.into_any(),
        Route::Grid => view! { <GridPage /> }.into_any(),
        Route::Selectors => view! { <SelectorsPage /> }.into_any(),
    }
}
