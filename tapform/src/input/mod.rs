//! Shared plumbing for value-holding input controls.

mod bindable;
mod tap;

pub use bindable::{BindableValue, ChangeCallback, TouchedCallback};
pub use tap::{InputKey, TapInput};
