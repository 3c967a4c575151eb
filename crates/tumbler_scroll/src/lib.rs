//! Tumbler Scroll
//!
//! Paginated, physics-driven scrolling over a virtualized item sequence.
//!
//! # Features
//!
//! - **Momentum**: drag and friction decelerate a released flick
//! - **Edges**: a spring pulls the viewport back from past either end, with
//!   reduced input grip while out of bounds
//! - **Pagination**: release decisions snap to whole items
//! - **Virtualization**: only items within the clip plus a margin are laid out
//! - **Active index**: which item sits at the selection point
//!
//! # Example
//!
//! ```rust
//! use tumbler_core::{GestureEvent, ItemSequence};
//! use tumbler_scroll::{ScrollOptions, ScrollView};
//!
//! let items = ItemSequence::padded(1..=10, 0).into_shared();
//! let mut view = ScrollView::new(ScrollOptions::paginated());
//! view.set_size([200.0, 40.0]);
//! view.sequence_from(&items);
//!
//! // Drag most of the way through the second item, then let go.
//! view.handle_gesture(GestureEvent::Start { count: 1 });
//! view.handle_gesture(GestureEvent::Update {
//!     delta: -70.0,
//!     velocity: 0.0,
//!     slip: false,
//!     count: 1,
//! });
//! view.handle_gesture(GestureEvent::End { velocity: 0.0, slip: false, count: 0 });
//!
//! for _ in 0..300 {
//!     view.frame(16.0);
//! }
//! assert_eq!(view.active_content(0), Some(3));
//! ```

pub mod config;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod resolver;
pub mod view;

pub use config::{ScrollOptions, ScrollOptionsPatch};
pub use error::{ConfigError, Result};
pub use gesture::{Edge, GestureState, ScrollPhase, SpringMode};
pub use layout::{Layout, RenderedItem};
pub use resolver::{resolve_active_index, ResolverInput};
pub use view::{ScrollEvent, ScrollView, REST_VELOCITY, TOLERANCE};
