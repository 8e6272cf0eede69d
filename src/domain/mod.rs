pub mod flag;
pub use flag::Flag;

pub mod message_reference;
pub use message_reference::MessageReference;
