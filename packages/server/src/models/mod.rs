pub mod meta;
pub mod scenario;
pub mod shared;
