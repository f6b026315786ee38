//! Report writing module
//!
//! Renders assembled readings as a monospaced table or as JSON.

mod json_writer;
mod table_writer;
mod writer;

pub use json_writer::JsonWriter;
pub use table_writer::TableWriter;
pub use writer::ReadingWriter;
