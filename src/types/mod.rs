pub mod column_mapping;
pub mod date_encoding;
pub mod endpoint;
pub mod payload;
pub mod records;
