// Block composition: Profile + display language -> style-free block sequence.

pub mod blocks;
pub mod composer;

pub use blocks::{Block, BlockKind, CONTACT_SEPARATOR};
pub use composer::compose;
