mod auth;
mod dashboard;
mod expert;
mod landing;
mod market;
mod not_found;
mod schemes;
mod weather;

pub use auth::Auth;
pub use dashboard::Dashboard;
pub use expert::Expert;
pub use landing::Landing;
pub use market::Market;
pub use not_found::NotFound;
pub use schemes::Schemes;
pub use weather::Weather;

/// Colour class for a price movement.
fn trend_class(is_rise: bool) -> &'static str {
    if is_rise {
        "trend trend--up"
    } else {
        "trend trend--down"
    }
}
