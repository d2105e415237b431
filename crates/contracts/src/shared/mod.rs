pub mod document;
pub mod export;
pub mod format;
pub mod list_query;
pub mod record;
pub mod table;
pub mod text;
