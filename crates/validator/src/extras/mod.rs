mod email;
mod length;

pub use email::*;
pub use length::*;
