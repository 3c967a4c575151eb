//! Tumbler Core
//!
//! Foundational primitives shared by the scroll engine and the widgets built
//! on it:
//!
//! - **Input events**: raw wheel/touch input and the normalized gesture stream
//! - **Input sync**: turns heterogeneous pointer input into start/update/end
//! - **Item sequences**: collaborator-owned item lists with a weak cursor
//! - **Event queues**: typed outbound events drained by the owner
//!
//! # Example
//!
//! ```rust
//! use tumbler_core::sequence::{ItemSequence, SequenceCursor};
//!
//! let items = ItemSequence::padded(1..=3, 1).into_shared();
//! let cursor = SequenceCursor::new(&items, 0).unwrap();
//!
//! assert_eq!(cursor.content(), None);
//! let next = cursor.next().unwrap();
//! assert_eq!(next.content(), Some(1));
//! ```

pub mod events;
pub mod sequence;
pub mod sync;

pub use events::{Axis, DeltaMode, EventQueue, GestureEvent, InputSource, RawInput};
pub use sequence::{Item, ItemSequence, SequenceCursor, SharedSequence};
pub use sync::{InputSync, SyncOptions};
