pub mod sweeper;

pub use sweeper::CacheSweeper;
