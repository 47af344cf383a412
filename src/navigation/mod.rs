//! Slide navigation: keeps the primary carousel, the nav strip and the URL
//! fragment in agreement about the current slide.
//!
//! Positions are 1-based everywhere they are visible to people (fragments,
//! nav entries); widget indices are 0-based. Conversion happens only inside
//! [`Synchronizer`].

pub mod fragment;
pub mod headless;
pub mod ports;
mod synchronizer;

pub use headless::HeadlessSlider;
pub use ports::{Location, NavStrip, PrimaryCarousel};
pub use synchronizer::{NavEvent, Synchronizer};
