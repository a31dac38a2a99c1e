pub mod reader;
pub mod values;
pub mod writer;

pub use reader::read_csv;
pub use values::{any_to_f64, any_to_string, parse_decimal};
pub use writer::{FLOAT_PRECISION, write_csv};
