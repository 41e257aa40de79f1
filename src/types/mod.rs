mod generate;
mod leads;
mod pay;

pub use generate::*;
pub use leads::*;
pub use pay::*;
