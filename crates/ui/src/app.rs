use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

/// Desktop root: stylesheet, window title and the routed flashcard pages.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Flashcards" }

        div { class: "flash-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal-error",
                        h1 { "The flashcard client stopped unexpectedly" }
                        p { "Restart the app. Details:" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
