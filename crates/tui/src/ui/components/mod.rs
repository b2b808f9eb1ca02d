//! UI components: the unit input widget and its shared building blocks.

pub mod common;
pub mod component;
pub mod unit_input;

pub(crate) use component::Component;
pub use unit_input::{UnitInputComponent, UnitInputState};
