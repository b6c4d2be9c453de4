pub mod parse;
pub mod serve;
pub mod summary;
