//! Per-frame systems, run by the session in a fixed order.

pub mod ai;
pub mod combat;
pub mod ragdoll;
pub mod spawn;
