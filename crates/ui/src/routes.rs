use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{QuickAddLayer, QuizView, ReviewView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ReviewView)] Review {},
        #[route("/quiz", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        QuickAddLayer {
            div { class: "app",
                Sidebar {}
                main { class: "content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Flashcards" }
            ul {
                li { Link { to: Route::Review {}, "Review" } }
                li { Link { to: Route::Quiz {}, "Quiz" } }
            }
        }
    }
}
