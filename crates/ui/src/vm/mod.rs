mod chart_vm;
mod login_vm;
mod results_vm;
mod scroll_vm;
mod time_fmt;
mod upload_vm;
mod visibility;

pub use chart_vm::{ChartBar, ChartSeries, chart_series};
pub use login_vm::{ButtonPlacement, is_form_valid, placement_after_edit};
pub use results_vm::{ResultRowVm, map_result_rows, row_dom_id};
pub use scroll_vm::{SCROLL_TOP_THRESHOLD_PX, ScrollVm, progress_percent};
pub use time_fmt::format_timestamp;
pub use upload_vm::{UploadState, UploadVm};
pub use visibility::{
    ElementBounds, OneShotTracker, PollingTracker, REVEAL_MARGIN_PX, ScrollFrame,
    VisibilityTracker, is_in_view,
};
