use dioxus::document::eval;
use dioxus::html::FileData;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::{AnalysisError, CsvUpload};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{
    ChartSeries, ScrollVm, UploadState, UploadVm, chart_series, map_result_rows, row_dom_id,
};

use super::scripts::{request_scroll_frame_script, scroll_bridge_script, scroll_to_top_script};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Sections that are watched for the fade-up reveal whenever present.
const BASE_REVEAL_IDS: [&str; 3] = ["upload-section", "chart-section", "table-section"];

fn reveal_ids(vm: &UploadVm) -> Vec<String> {
    let mut ids: Vec<String> = BASE_REVEAL_IDS.iter().map(|id| (*id).to_string()).collect();
    match vm.state() {
        UploadState::Succeeded(set) => ids.extend(set.results.iter().map(row_dom_id)),
        UploadState::Failed => ids.push("analysis-error".to_string()),
        UploadState::Idle | UploadState::Uploading => {}
    }
    ids
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut upload = use_signal(UploadVm::default);
    let mut drag_active = use_signal(|| false);
    let mut scroll = use_signal(ScrollVm::default);
    let mut bound_generation = use_signal(|| None::<u64>);

    // Unauthenticated visits bounce straight back to the login form.
    {
        let session = ctx.session();
        use_effect(move || {
            if !session.is_authenticated() {
                navigator.replace(Route::Login {});
            }
        });
    }

    let submit = {
        let analysis = ctx.analysis();
        use_callback(move |csv: CsvUpload| {
            if !upload.write().begin() {
                // A request is already running; drop this one silently.
                return;
            }
            let analysis = analysis.clone();
            spawn(async move {
                match analysis.analyze(csv).await {
                    Ok(set) => upload.write().settle(Ok(set)),
                    // Lost the service-level race: the winning request will
                    // settle the state on its own.
                    Err(AnalysisError::Busy) => {}
                    Err(_) => upload.write().settle(Err(ViewError::Analysis)),
                }
            });
        })
    };

    // Shared by the drop zone and the browse input.
    let ingest = move |file: FileData| {
        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => submit.call(CsvUpload::new(file.name(), bytes.to_vec())),
                Err(_) => upload.write().settle(Err(ViewError::Analysis)),
            }
        });
    };

    let on_drag_enter = move |evt: DragEvent| {
        evt.prevent_default();
        drag_active.set(true);
    };
    let on_drag_over = move |evt: DragEvent| {
        evt.prevent_default();
        drag_active.set(true);
    };
    let on_drag_leave = move |evt: DragEvent| {
        evt.prevent_default();
        drag_active.set(false);
    };
    let on_drop = move |evt: DragEvent| {
        evt.prevent_default();
        drag_active.set(false);
        // First file only; extras are ignored silently.
        if let Some(file) = evt.files().into_iter().next() {
            ingest(file);
        }
    };
    let on_browse = move |evt: FormEvent| {
        if let Some(file) = evt.files().into_iter().next() {
            ingest(file);
        }
    };

    // One bridge per mount: frames stream in for the component's lifetime
    // and the future is dropped (closing the channel) on unmount.
    use_future(move || async move {
        let mut bridge = eval(&scroll_bridge_script());
        while let Ok(frame) = bridge.recv().await {
            scroll.with_mut(|vm| vm.apply_frame(&frame));
        }
    });

    // Re-bind the reveal sources whenever the result content is replaced,
    // then ask the bridge for a fresh frame so already-visible sections
    // animate in without waiting for a scroll.
    use_effect(move || {
        let generation = upload.read().generation();
        if *bound_generation.read() == Some(generation) {
            return;
        }
        bound_generation.set(Some(generation));
        let ids = reveal_ids(&upload.read());
        scroll.with_mut(|vm| vm.rebind(&ids));
        let _ = eval(request_scroll_frame_script());
    });

    let on_scroll_top = move |_| {
        let _ = eval(scroll_to_top_script());
    };

    let on_logout = {
        let session = ctx.session();
        move |_| {
            session.logout();
            navigator.replace(Route::Login {});
        }
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DashboardTestHandles>() {
                handles.register(submit, scroll, upload);
            }
        }
    }

    let upload_read = upload.read();
    let scroll_read = scroll.read();

    let is_uploading = upload_read.is_uploading();
    let error_message = upload_read.error_message();
    let result = upload_read.result();
    let series: Option<ChartSeries> = result.map(|set| chart_series(set.statistics));
    let rows = result
        .map(|set| map_result_rows(set, &scroll_read))
        .unwrap_or_default();

    let progress_scale = scroll_read.progress_percent() / 100.0;
    let scroll_top_class = if scroll_read.past_threshold() {
        "scroll-top visible"
    } else {
        "scroll-top"
    };
    let upload_section_class =
        format!("upload-section {}", scroll_read.reveal_class("upload-section"));
    let error_class = format!("error-message {}", scroll_read.reveal_class("analysis-error"));
    let chart_class = format!("chart-section {}", scroll_read.reveal_class("chart-section"));
    let table_class = format!("table-section {}", scroll_read.reveal_class("table-section"));
    let drop_zone_class = if drag_active() {
        "drop-zone drag-active"
    } else {
        "drop-zone"
    };

    rsx! {
        div { class: "dashboard-wrapper", id: "dashboard-root",
            div {
                class: "scroll-progress",
                id: "scroll-progress",
                style: "transform: scaleX({progress_scale});",
            }
            button {
                class: "{scroll_top_class}",
                id: "scroll-top",
                r#type: "button",
                onclick: on_scroll_top,
                "↑"
            }

            nav { class: "dashboard-nav",
                h1 { "Sentiment Analysis Dashboard" }
                button {
                    class: "logout-button",
                    id: "logout",
                    r#type: "button",
                    onclick: on_logout,
                    "Logout"
                }
            }

            div { class: "dashboard-content",
                div {
                    class: "{upload_section_class}",
                    id: "upload-section",
                    ondragenter: on_drag_enter,
                    ondragover: on_drag_over,
                    ondragleave: on_drag_leave,
                    ondrop: on_drop,

                    input {
                        id: "file-input",
                        class: "file-input",
                        r#type: "file",
                        accept: ".csv",
                        onchange: on_browse,
                    }
                    label { r#for: "file-input", class: "{drop_zone_class}",
                        p { "Drag & Drop your CSV file here or click to browse" }
                        if is_uploading {
                            div { class: "loader", id: "upload-loader" }
                        }
                    }
                }

                if let Some(message) = error_message {
                    div { class: "{error_class}", id: "analysis-error", "{message}" }
                }

                if let Some(series) = series {
                    div { class: "results-container",
                        div { class: "{chart_class}", id: "chart-section",
                            h3 { "{series.title}" }
                            div { class: "chart-bars",
                                for bar in series.bars {
                                    div { class: "chart-bar",
                                        div {
                                            class: "chart-bar__fill",
                                            style: "height: {bar.height_percent}%; background-color: {bar.color};",
                                        }
                                        span { class: "chart-bar__label", "{bar.label} ({bar.value})" }
                                    }
                                }
                            }
                        }

                        div { class: "{table_class}", id: "table-section",
                            h3 { "Detailed Results" }
                            div { class: "table-wrapper",
                                table {
                                    thead {
                                        tr {
                                            th { "ID" }
                                            th { "Text" }
                                            th { "Sentiment" }
                                            th { "Timestamp" }
                                        }
                                    }
                                    tbody {
                                        for row in rows {
                                            tr {
                                                key: "{row.dom_id}",
                                                id: "{row.dom_id}",
                                                class: "{row.css_class}",
                                                style: "{row.style}",
                                                td { "{row.id_label}" }
                                                td { "{row.text}" }
                                                td {
                                                    span { class: "{row.badge_class}", "{row.sentiment_label}" }
                                                }
                                                td { "{row.timestamp_label}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DashboardTestHandles {
    submit: Rc<RefCell<Option<Callback<CsvUpload>>>>,
    scroll: Rc<RefCell<Option<Signal<ScrollVm>>>>,
    upload: Rc<RefCell<Option<Signal<UploadVm>>>>,
}

#[cfg(test)]
impl DashboardTestHandles {
    pub(crate) fn register(
        &self,
        submit: Callback<CsvUpload>,
        scroll: Signal<ScrollVm>,
        upload: Signal<UploadVm>,
    ) {
        *self.submit.borrow_mut() = Some(submit);
        *self.scroll.borrow_mut() = Some(scroll);
        *self.upload.borrow_mut() = Some(upload);
    }

    pub(crate) fn submit(&self) -> Callback<CsvUpload> {
        (*self.submit.borrow()).expect("dashboard submit registered")
    }

    pub(crate) fn scroll(&self) -> Signal<ScrollVm> {
        (*self.scroll.borrow()).expect("dashboard scroll registered")
    }

    pub(crate) fn upload(&self) -> Signal<UploadVm> {
        (*self.upload.borrow()).expect("dashboard upload registered")
    }
}
