mod dashboard;
mod login;
mod scripts;
mod state;

pub use dashboard::DashboardView;
pub use login::LoginView;
pub use state::ViewError;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
