use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{DashboardView, LoginView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", LoginView)] Login {},
    #[route("/dashboard", DashboardView)] Dashboard {},
}
