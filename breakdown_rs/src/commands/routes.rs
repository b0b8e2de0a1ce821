//! `breakdown routes` - the route table.

use breakdown_core::Route;

pub fn run() {
    for line in lines() {
        println!("{line}");
    }
}

fn lines() -> Vec<String> {
    Route::ALL
        .into_iter()
        .map(|route| format!("{:<12} {:<10} {}", route.path(), route.label(), route.title()))
        .collect()
}
