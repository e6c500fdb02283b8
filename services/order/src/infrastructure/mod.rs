pub mod persistence;
pub mod remote;

pub use persistence::*;
pub use remote::*;
