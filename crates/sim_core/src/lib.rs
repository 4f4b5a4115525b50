//! Headless arcade-shooter simulation: streamed procedural world, actor AI,
//! hitscan combat, ragdolls, shop, and the per-frame session step.
//!
//! No rendering, audio, or networking lives here. The platform layer feeds
//! [`FrameInput`] into [`Session::step`], reads back a [`FrameSnapshot`],
//! and drains [`SimEvents`]; everything else is internal and deterministic
//! for a given seed and input trace.

pub mod actor;
pub mod events;
pub mod player;
pub mod session;
pub mod shop;
pub mod snapshot;
pub mod streaming;
pub mod systems;

pub use actor::{Actor, ActorId, ActorStore, Behavior};
pub use data_runtime::Archetype;
pub use events::{AudioCue, CommentaryEvent, CommentaryKind, SimEvents};
pub use player::{PlayerState, MAX_HEALTH};
pub use session::{FrameInput, Session};
pub use shop::PurchaseItem;
pub use snapshot::{FrameSnapshot, HudStatus};
pub use streaming::{ChunkStream, StreamDelta};
pub use systems::combat::Tracer;
