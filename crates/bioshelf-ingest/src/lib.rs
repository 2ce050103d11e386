pub mod csv_import;

pub use csv_import::{
    EXPECTED_HEADERS, ImportBatch, is_valid_expiry_date, parse_materials_csv,
};
