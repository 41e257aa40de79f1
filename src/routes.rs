pub mod generate;
pub mod leads;
pub mod pay;
pub mod wizard;
