//! Landing page presentation around the hero scene.

pub mod content;
pub mod entrance;
pub mod layout;

pub use content::PageContent;
pub use entrance::{Entrance, EntranceFrame, Pose};
