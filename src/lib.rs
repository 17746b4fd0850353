pub mod cli;
pub mod complex;
pub mod ctx;
pub mod enrich;
pub mod error;
pub mod io;
pub mod isoform;
pub mod math;
pub mod pipeline;
pub mod proteins;
pub mod schema;
