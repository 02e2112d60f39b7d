pub mod decode;
pub mod fields;
pub mod field_extractor;
pub mod schema;

pub use fields::InvoiceFields;
pub use field_extractor::{extract_fields, parse_fields};
pub use schema::SchemaVariant;
