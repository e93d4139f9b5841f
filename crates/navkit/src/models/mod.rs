//! Input models: the route tree, layout settings, and user profile.

pub mod route;
pub mod settings;

pub use route::{RouteKind, RouteNode, load_routes};
pub use settings::{Settings, UserInfo};
