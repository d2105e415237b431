pub mod entity_kind;
pub mod record_status;
pub mod role;
pub mod row_action;

pub use entity_kind::EntityKind;
pub use record_status::RecordStatus;
pub use role::Role;
pub use row_action::RowAction;
