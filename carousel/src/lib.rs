//! A headless card carousel engine.
//!
//! For adapter-level utilities (card poses, tweens, a frame controller), see the
//! `carousel-adapter` crate.
//!
//! The crate owns the state machine behind a rotating card widget: which card is current,
//! the `Idle -> Exiting -> Entering -> Idle` transition sequence, drag gesture
//! classification, the autoplay idle timer and the viewport visibility gate.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - timestamps (`now_ms`) and periodic [`Carousel::tick`] calls
//! - pointer/touch positions for drags
//! - the widget's viewport intersection ratio
//! - navigation commands (arrows, pagination dots)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod carousel;
mod engine;
mod gesture;
mod item;
mod key;
mod options;
mod types;
mod visibility;


pub use autoplay::AutoplayTimer;
pub use carousel::Carousel;
pub use engine::TransitionEngine;
pub use gesture::GestureTracker;
pub use item::CarouselItem;
pub use options::{
    CarouselOptions, OnChangeCallback, OnIndexChangeCallback, OnPhaseChangeCallback,
};
pub use types::{
    CarouselSnapshot, Direction, DragOutcome, MOUSE_COMMIT_THRESHOLD, MountEpoch, Phase,
    PhaseChange, PointerKind, PresentationMode, TOUCH_COMMIT_THRESHOLD, TransitionSource,
    VisibilityPolicy,
};
pub use visibility::VisibilityGate;

#[doc(hidden)]
pub use key::CarouselKey;
