//! Menu compilation for the navigation sider.
//!
//! Route trees are compiled per user into:
//! - a menu forest of selectable items and expandable containers
//! - a path index mapping each leaf path to its breadcrumb trail
//! - a list of the nodes that were dropped and why

mod compiler;
mod icon;
mod index;

pub use compiler::{Compilation, MenuNode, Omission, OmissionReason, TitleParts, compile};
pub use icon::Icon;
pub use index::{BreadcrumbLabel, PathIndex};
