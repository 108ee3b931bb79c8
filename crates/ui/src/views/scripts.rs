use dioxus::document::eval;

const READ_SELECTION_SCRIPT: &str = r#"
    const sel = window.getSelection();
    if (!sel || sel.rangeCount === 0 || sel.isCollapsed) {
        return "";
    }
    return sel.toString() || "";
"#;

pub(super) async fn read_selection() -> Option<String> {
    eval(READ_SELECTION_SCRIPT).join::<String>().await.ok()
}
