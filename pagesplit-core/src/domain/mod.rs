//! Domain layer: break location, segmentation and reconstruction
//!
//! Everything here is a pure function over in-memory text. The only shared
//! state is the read-only built-in [`PatternSet`].

pub mod locator;
pub mod patterns;
pub mod reconstruct;
pub mod segmenter;
pub mod types;

pub use locator::{head_excerpt, BreakLocator};
pub use patterns::{PatternSet, AVOIDANCE_PATTERNS, TRIGGER_PATTERNS};
pub use reconstruct::reconstruct;
pub use segmenter::Segmenter;
pub use types::{BreakIndicator, BreakInfo, BreakMarker, ElementInfo, Segment};
