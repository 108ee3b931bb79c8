use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::FlipCardVm;

#[component]
pub fn ReviewView() -> Element {
    let ctx = use_context::<AppContext>();
    let review = ctx.review_service();
    let mut vm = use_signal(FlipCardVm::default);

    let load_card = use_callback(move |()| {
        vm.write().begin_loading();
        let review = review.clone();
        spawn(async move {
            let result = review.next_card().await;
            vm.write().apply(result);
        });
    });
    use_effect(move || load_card.call(()));

    let view = vm.read().clone();
    let card_class = if view.is_flipped() {
        "flashcard flipped"
    } else {
        "flashcard"
    };

    rsx! {
        div { class: "page review-page",
            header { class: "view-header",
                h2 { class: "view-title", "Review" }
                p { id: "idioma-display", class: "view-subtitle", "{view.language_label()}" }
            }
            div { class: "view-divider" }
            div {
                id: "flashcard-box",
                class: "{card_class}",
                onclick: move |_| vm.write().flip(),
                div {
                    id: "card-frente",
                    class: "flashcard-face flashcard-front",
                    "{view.front_text()}"
                }
                div {
                    id: "card-verso",
                    class: "flashcard-face flashcard-back",
                    "{view.back_text()}"
                }
            }
            div { class: "review-actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| vm.write().flip(),
                    "Flip"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| load_card.call(()),
                    "Next card"
                }
            }
        }
    }
}
