use services::CsvUpload;

use crate::vm::{ElementBounds, ScrollFrame};

use super::test_harness::{AnalysisOutcome, ViewKind, sample_result_set, setup_view_harness};

fn sample_upload() -> CsvUpload {
    CsvUpload::new("data.csv", b"id,text\n1,hello\n".to_vec())
}

fn frame_with_rows(offset: f64) -> ScrollFrame {
    ScrollFrame {
        offset,
        viewport_height: 800.0,
        content_height: 2000.0,
        elements: vec![
            ElementBounds {
                id: "table-section".to_string(),
                top: 60.0,
                bottom: 500.0,
            },
            ElementBounds {
                id: "result-row-1".to_string(),
                top: 100.0,
                bottom: 140.0,
            },
        ],
    }
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_renders_the_form() {
    let mut harness = setup_view_harness(
        ViewKind::Login,
        AnalysisOutcome::Success(sample_result_set()),
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("login-username"), "missing username in {html}");
    assert!(html.contains("login-password"), "missing password in {html}");
    assert!(html.contains("Sign In"), "missing submit label in {html}");
    assert!(
        !html.contains("Invalid credentials"),
        "error shown too early in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_the_drop_zone() {
    let mut harness = setup_view_harness(
        ViewKind::Dashboard,
        AnalysisOutcome::Success(sample_result_set()),
    )
    .await;
    harness.rebuild();
    assert!(harness.session.is_authenticated());
    let html = harness.render();
    assert!(html.contains("drop-zone"), "missing drop zone in {html}");
    assert!(
        html.contains("your CSV file"),
        "missing drop hint in {html}"
    );
    assert!(html.contains("Logout"), "missing logout in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn successful_upload_renders_chart_and_rows() {
    let mut harness = setup_view_harness(
        ViewKind::Dashboard,
        AnalysisOutcome::Success(sample_result_set()),
    )
    .await;
    harness.rebuild();

    let handles = harness.handles.clone().expect("dashboard handles");
    harness.dom.in_runtime(|| handles.submit().call(sample_upload()));
    for _ in 0..4 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(
        html.contains("Sentiment Distribution"),
        "missing chart in {html}"
    );
    assert!(
        html.contains("Detailed Results"),
        "missing table in {html}"
    );
    assert!(html.contains("result-row-1"), "missing row 1 in {html}");
    assert!(html.contains("result-row-3"), "missing row 3 in {html}");
    assert!(
        !html.contains("Error analyzing file"),
        "stale error in {html}"
    );

    let upload = harness.dom.in_runtime(|| handles.upload());
    harness.dom.in_runtime(|| {
        let vm = upload.read();
        let set = vm.result().expect("result set held after success");
        assert_eq!(set.statistics.total() as usize, set.results.len());
    });
}

#[tokio::test(flavor = "current_thread")]
async fn failed_upload_shows_the_error_and_no_results() {
    let mut harness =
        setup_view_harness(ViewKind::Dashboard, AnalysisOutcome::Failure).await;
    harness.rebuild();

    let handles = harness.handles.clone().expect("dashboard handles");
    harness.dom.in_runtime(|| handles.submit().call(sample_upload()));
    for _ in 0..4 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(
        html.contains("Error analyzing file"),
        "missing error in {html}"
    );
    assert!(
        !html.contains("Detailed Results"),
        "results shown despite failure in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn next_successful_upload_clears_the_error() {
    let mut harness =
        setup_view_harness(ViewKind::Dashboard, AnalysisOutcome::Failure).await;
    harness.rebuild();

    let handles = harness.handles.clone().expect("dashboard handles");
    harness.dom.in_runtime(|| handles.submit().call(sample_upload()));
    for _ in 0..4 {
        harness.drive_async().await;
    }
    assert!(harness.render().contains("Error analyzing file"));

    harness
        .api
        .set_outcome(AnalysisOutcome::Success(sample_result_set()));
    harness.dom.in_runtime(|| handles.submit().call(sample_upload()));
    for _ in 0..4 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(
        !html.contains("Error analyzing file"),
        "error not cleared in {html}"
    );
    assert!(
        html.contains("Detailed Results"),
        "missing results after retry in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn rows_animate_in_after_a_scroll_frame() {
    let mut harness = setup_view_harness(
        ViewKind::Dashboard,
        AnalysisOutcome::Success(sample_result_set()),
    )
    .await;
    harness.rebuild();

    let handles = harness.handles.clone().expect("dashboard handles");
    harness.dom.in_runtime(|| handles.submit().call(sample_upload()));
    for _ in 0..4 {
        harness.drive_async().await;
    }
    assert!(!harness.render().contains("animate-in"));

    let mut scroll = harness.dom.in_runtime(|| handles.scroll());
    harness
        .dom
        .in_runtime(|| scroll.with_mut(|vm| vm.apply_frame(&frame_with_rows(400.0))));
    for _ in 0..2 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(
        html.contains("animate-in"),
        "rows did not reveal in {html}"
    );
    assert!(
        html.contains("scroll-top visible"),
        "scroll-to-top not shown in {html}"
    );
}
