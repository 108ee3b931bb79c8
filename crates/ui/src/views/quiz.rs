use std::sync::Arc;

use dioxus::prelude::*;
use services::QuizEvent;
use tokio::sync::mpsc::unbounded_channel;

use crate::context::AppContext;
use crate::vm::{QuizPanel, QuizScreen};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let screen = use_signal(QuizScreen::default);

    // The controller renders through a channel; this view drains it into `screen`.
    let controller = use_hook(move || {
        let (events, mut inbox) = unbounded_channel::<QuizEvent>();
        let mut screen = screen;
        spawn(async move {
            while let Some(event) = inbox.recv().await {
                screen.write().apply(event);
            }
        });
        let controller = ctx.quiz_controller(Arc::new(events));
        let _ = controller.start_session();
        controller
    });
    {
        let controller = controller.clone();
        use_drop(move || controller.teardown());
    }

    let view = screen.read().clone();
    let options_class = if view.dimmed {
        "quiz-options quiz-options--loading"
    } else {
        "quiz-options"
    };
    let choice_buttons = view.choices.iter().enumerate().map(|(index, choice)| {
        let controller = controller.clone();
        rsx! {
            button {
                key: "{index}",
                class: "{choice.class()}",
                r#type: "button",
                onclick: move |_| {
                    let _ = controller.submit_answer(index);
                },
                "{choice.label}"
            }
        }
    });
    let play_again = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            let _ = controller.start_session();
        }
    };

    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "Quiz" }
            }
            div { class: "view-divider" }
            match view.panel {
                QuizPanel::Quiz => rsx! {
                    div { id: "quiz-container", class: "quiz-container",
                        p { id: "score-display", class: "quiz-score", "{view.score_label()}" }
                        h3 { id: "question-text", class: "quiz-question", "{view.prompt}" }
                        div { id: "options-grid", class: "{options_class}",
                            {choice_buttons}
                        }
                    }
                },
                QuizPanel::Results => rsx! {
                    div { id: "end-screen", class: "quiz-results",
                        h3 { "Quiz complete" }
                        p { "Correct: "
                            span { id: "final-correct", "{view.final_correct}" }
                        }
                        p { "Incorrect: "
                            span { id: "final-incorrect", "{view.final_incorrect}" }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: play_again,
                            "Play again"
                        }
                    }
                },
                QuizPanel::Error => rsx! {
                    div { id: "error-message", class: "quiz-error",
                        p { id: "error-text", "{view.error_message}" }
                    }
                },
            }
        }
    }
}
