pub mod batch;
pub mod data_writer;
pub mod index_writer;
pub mod parallel_writer;
