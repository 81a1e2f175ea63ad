pub mod file;
pub mod object_url;
pub mod storage;
