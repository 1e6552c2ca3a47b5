use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use senti_core::model::{AnalysisRecord, ResultSet, Sentiment, SentimentCounts, SessionToken};
use services::{
    AnalysisError, AnalysisGateway, AnalysisService, AuthError, AuthGateway, CsvUpload,
    SessionService,
};

use crate::context::{UiApp, build_app_context};
use crate::views::{DashboardView, LoginView};

use super::dashboard::DashboardTestHandles;

pub(crate) const HARNESS_PASSWORD: &str = "correct-horse";

/// What the fake analyze endpoint should do next.
#[derive(Clone)]
pub(crate) enum AnalysisOutcome {
    Success(ResultSet),
    Failure,
}

/// In-process stand-in for both endpoints, with a switchable outcome.
pub(crate) struct FakeApi {
    outcome: Mutex<AnalysisOutcome>,
}

impl FakeApi {
    pub(crate) fn new(outcome: AnalysisOutcome) -> Self {
        Self {
            outcome: Mutex::new(outcome),
        }
    }

    pub(crate) fn set_outcome(&self, outcome: AnalysisOutcome) {
        *self.outcome.lock().expect("outcome lock") = outcome;
    }
}

#[async_trait]
impl AuthGateway for FakeApi {
    async fn request_token(
        &self,
        _username: &str,
        password: &str,
    ) -> Result<SessionToken, AuthError> {
        if password == HARNESS_PASSWORD {
            Ok(SessionToken::new("harness-token"))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[async_trait]
impl AnalysisGateway for FakeApi {
    async fn analyze(
        &self,
        _token: &SessionToken,
        _upload: CsvUpload,
    ) -> Result<ResultSet, AnalysisError> {
        let outcome = self.outcome.lock().expect("outcome lock").clone();
        match outcome {
            AnalysisOutcome::Success(set) => Ok(set),
            AnalysisOutcome::Failure => Err(AnalysisError::HttpStatus(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            )),
        }
    }
}

pub(crate) fn sample_result_set() -> ResultSet {
    ResultSet {
        statistics: SentimentCounts {
            positive: 2,
            neutral: 1,
            negative: 0,
        },
        results: vec![
            AnalysisRecord {
                id: 1,
                text: "love it".into(),
                sentiment: Sentiment::Positive,
                timestamp: Some("2024-05-01T10:00:00Z".into()),
            },
            AnalysisRecord {
                id: 2,
                text: "fine".into(),
                sentiment: Sentiment::Neutral,
                timestamp: None,
            },
            AnalysisRecord {
                id: 3,
                text: "great".into(),
                sentiment: Sentiment::Positive,
                timestamp: None,
            },
        ],
    }
}

struct TestApp {
    session: Arc<SessionService>,
    analysis: Arc<AnalysisService>,
}

impl UiApp for TestApp {
    fn session(&self) -> Arc<SessionService> {
        Arc::clone(&self.session)
    }

    fn analysis(&self) -> Arc<AnalysisService> {
        Arc::clone(&self.analysis)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewKind {
    Login,
    Dashboard,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: Option<DashboardTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
    }
}

pub(crate) struct ViewHarness {
    pub dom: VirtualDom,
    pub api: Arc<FakeApi>,
    pub session: Arc<SessionService>,
    pub handles: Option<DashboardTestHandles>,
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
}

pub(crate) fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub(crate) async fn setup_view_harness(view: ViewKind, outcome: AnalysisOutcome) -> ViewHarness {
    let api = Arc::new(FakeApi::new(outcome));
    let session = Arc::new(SessionService::new(api.clone()));
    let analysis = Arc::new(AnalysisService::new(Arc::clone(&session), api.clone()));

    if matches!(view, ViewKind::Dashboard) {
        session
            .login("analyst", HARNESS_PASSWORD)
            .await
            .expect("harness login");
    }

    let handles = matches!(view, ViewKind::Dashboard).then(DashboardTestHandles::default);
    let app = Arc::new(TestApp {
        session: Arc::clone(&session),
        analysis,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        api,
        session,
        handles,
    }
}
