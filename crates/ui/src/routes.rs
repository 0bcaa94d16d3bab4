use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ActivityPage, AssessmentPage, PageView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", PageView)] Page {},
        #[route("/activity", ActivityPage)] Activity {},
        #[route("/assessment", AssessmentPage)] Assessment {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            nav { class: "topbar",
                h1 { "Quiz" }
                Link { to: Route::Page {}, "Page" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
