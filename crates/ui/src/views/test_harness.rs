use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use flash_core::model::{QuestionRecord, QuickCard};
use services::{
    ApiError, CardSink, QuickAddService, QuizLoadError, QuizSource, ReviewCard, ReviewService,
    ReviewSource,
};

use crate::context::{UiApp, build_app_context};
use crate::views::{QuizView, ReviewView};

/// Canned backend answers for view tests.
pub struct StubBackend {
    pub questions: Result<Vec<QuestionRecord>, String>,
    pub review: ReviewCard,
}

#[async_trait]
impl QuizSource for StubBackend {
    async fn fetch_questions(&self) -> Result<Vec<QuestionRecord>, QuizLoadError> {
        self.questions.clone().map_err(QuizLoadError::Unavailable)
    }
}

#[async_trait]
impl ReviewSource for StubBackend {
    async fn fetch_review_card(&self) -> Result<ReviewCard, ApiError> {
        Ok(self.review.clone())
    }
}

#[async_trait]
impl CardSink for StubBackend {
    async fn save_quick_card(&self, _card: &QuickCard) -> Result<bool, ApiError> {
        Ok(true)
    }
}

struct TestApp {
    backend: Arc<StubBackend>,
}

impl UiApp for TestApp {
    fn quiz_source(&self) -> Arc<dyn QuizSource> {
        self.backend.clone()
    }

    fn review_service(&self) -> Arc<ReviewService> {
        Arc::new(ReviewService::new(self.backend.clone()))
    }

    fn quick_add_service(&self) -> Arc<QuickAddService> {
        Arc::new(QuickAddService::new(self.backend.clone()))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Quiz,
    Review,
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Review => rsx! { ReviewView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Drive pending tasks until `needle` shows up or the attempts run out.
    pub async fn render_until(&mut self, needle: &str) -> String {
        for _ in 0..20 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, backend: StubBackend) -> ViewHarness {
    let app = Arc::new(TestApp {
        backend: Arc::new(backend),
    });
    let dom = VirtualDom::new_with_props(HarnessRoot, HarnessProps { app, view });
    ViewHarness { dom }
}
