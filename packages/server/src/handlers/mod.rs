pub mod meta;
pub mod scenario;
