pub mod award;
pub mod canonical;
pub mod source;

pub use award::*;
pub use canonical::*;
pub use source::*;
