pub mod adjacency;
pub mod frame;
pub mod pins;
pub mod throw;
