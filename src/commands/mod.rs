pub mod values;

pub use values::{ValuesCommand, ValuesOptions};
