//! Command implementations for the lzpack CLI.

pub mod batch;
pub mod compress;
pub mod decompress;
pub mod info;
pub mod test;

pub use batch::BatchOptions;
pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use info::cmd_info;
pub use test::cmd_test;
