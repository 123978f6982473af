pub mod instances;
pub mod io;
