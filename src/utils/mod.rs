// Utils compartidos

pub mod constants;
pub mod storage;
pub mod utm;
pub mod format;

pub use constants::*;
pub use storage::*;
pub use utm::*;
pub use format::*;
