//! Transform engine
//!
//! A `Moveable` wraps one world object for the duration of a move/rotate
//! gesture. It snapshots the object's baseline pose (and, for buildings, the
//! tree of attached nodes and sub-buildings) once, then derives every
//! preview transform from that snapshot.

mod heading;
mod move_context;
mod moveable;
mod relocation;

pub use heading::{Heading, rotation_about_up};
pub use move_context::MoveContext;
pub use moveable::Moveable;
