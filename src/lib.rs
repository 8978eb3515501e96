pub mod asset;
pub mod channel;
pub mod condvar;
pub mod mutex;
pub mod pipeline;
pub mod trace;

pub use asset::Asset;
pub use channel::Channel;
