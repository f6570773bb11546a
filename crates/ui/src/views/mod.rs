mod dashboard;
mod login;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use login::LoginView;
pub use state::ViewError;
