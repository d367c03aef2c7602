pub mod observation;
pub mod time;
pub mod verdict;

pub use observation::*;
pub use time::*;
pub use verdict::*;
