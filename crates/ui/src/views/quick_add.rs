use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::QuickAddVm;
use super::scripts::read_selection;

/// Wraps the app content and offers to turn selected text into a card.
#[component]
pub fn QuickAddLayer(children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let quick_add = ctx.quick_add_service();
    let mut vm = use_signal(QuickAddVm::default);

    let on_mouse_up = move |_: MouseEvent| {
        if vm.read().is_open() {
            return;
        }
        spawn(async move {
            if let Some(selection) = read_selection().await {
                vm.write().selection_changed(&selection);
            }
        });
    };

    let on_save = move |_: MouseEvent| {
        let Some(draft) = vm.write().begin_save() else {
            return;
        };
        let quick_add = quick_add.clone();
        spawn(async move {
            let result = quick_add.save(draft).await;
            if let Err(err) = &result {
                log::warn!("quick add failed: {err}");
            }
            vm.write().finish_save(&result);
        });
    };

    let state = vm.read().clone();

    rsx! {
        div { class: "quick-add-layer", onmouseup: on_mouse_up,
            {children}
        }
        if let Some(notice) = state.notice() {
            div { class: "notice",
                span { "{notice.message()}" }
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| vm.write().dismiss_notice(),
                    "Dismiss"
                }
            }
        }
        if state.is_open() {
            div { id: "modal-add", class: "modal-backdrop",
                div { class: "modal",
                    h3 { "Quick add" }
                    label { r#for: "modal-frente", "Front" }
                    input {
                        id: "modal-frente",
                        value: "{state.front()}",
                        oninput: move |evt| vm.write().set_front(evt.value()),
                    }
                    label { r#for: "modal-verso", "Translation" }
                    input {
                        id: "modal-verso",
                        autofocus: true,
                        value: "{state.back()}",
                        oninput: move |evt| vm.write().set_back(evt.value()),
                    }
                    div { class: "modal-actions",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| vm.write().close(),
                            "Cancel"
                        }
                        button {
                            id: "btn-salvar-modal",
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: state.is_saving(),
                            onclick: on_save,
                            "{state.save_label()}"
                        }
                    }
                }
            }
        }
    }
}
