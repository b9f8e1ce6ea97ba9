pub mod enhancer;
pub mod normalize;
pub mod registry;
pub mod session;
pub mod submenu;

pub use crate::domain::model::{FieldEvent, FieldKind, FieldRule, SubmenuView};
pub use crate::domain::ports::{FieldHost, SidebarHost};
pub use crate::utils::error::Result;
