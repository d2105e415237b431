//! Table rendering: columns, cell formatting, status styles, row actions

mod card;
mod column;
mod permissions;
mod presets;
mod render;
mod status_style;

pub use card::{CardDescriptor, CardField};
pub use column::{ColumnFormat, ColumnSpec, MISSING_VALUE};
pub use permissions::{is_action_visible, PermissionRule, PermissionTable, StatusScope};
pub use presets::EntityPreset;
pub use render::{RenderedColumn, RenderedRow, RenderedTable, TableRenderer};
pub use status_style::{status_style, BadgeColor, StatusStyle};
