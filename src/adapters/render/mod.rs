//! Update sink adapters for the rendering boundary.

mod channel;
mod in_memory;

pub use channel::ChannelUpdateSink;
pub use in_memory::InMemoryUpdateSink;
