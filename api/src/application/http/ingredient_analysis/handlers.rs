pub mod analyze_text;
pub mod check_text;
pub mod get_allergens;
pub mod get_schema;
pub mod scan_image;
