pub mod extractor;
pub mod idle;
pub mod session;
pub mod test_utils;
pub mod timer;
