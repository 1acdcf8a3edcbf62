pub mod dist;
mod link;
mod node;
mod virt;

pub mod parameters;

pub use link::LinkId;
pub use node::NodeId;
pub use virt::{VirtualLinkId, VirtualNodeId};
