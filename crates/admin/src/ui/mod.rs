//! Dioxus presentation layer

pub mod presentation;

use dioxus::prelude::*;

use self::presentation::components::roster::RosterPage;

/// Application root
pub fn app() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-dark-bg text-white",
            RosterPage {}
        }
    }
}
