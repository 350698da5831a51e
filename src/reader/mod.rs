pub mod lazy;
pub mod reader_pool;
pub mod snapshot_reader;
