//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and owns only state and timing. This crate provides
//! small, framework-neutral helpers commonly needed by adapters:
//!
//! - Eased tweens sampled by phase progress
//! - Card poses for the flip transition, live drag skew and snap-back
//! - A controller producing one render [`Frame`] per tick
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

mod controller;
mod pose;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{Controller, Frame};
pub use pose::{CardPose, PoseAnimator, PoseOptions};
pub use tween::{Easing, Tween};
