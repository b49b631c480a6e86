//! Checkbox widget - a bindable boolean toggle.
//!
//! Rendered output:
//!
//! ```text
//! <ion-checkbox class="checkbox-md [checkbox-disabled]">
//!   <div class="checkbox-icon [checkbox-checked]"><div class="checkbox-inner"></div></div>
//!   <button id="checkbox-0" role="checkbox" type="button" ion-button="item-cover"
//!           aria-checked="false" [aria-labelledby="lbl-3"] aria-disabled="false"
//!           class="item-cover"></button>
//! </ion-checkbox>
//! ```

mod builder;
pub mod events;
pub mod render;
mod state;

pub use builder::{CheckboxBuilder, HasRedraw, NeedsRedraw};
pub use state::Checkbox;

/// Row class mirroring the checked state.
pub const ITEM_CHECKED_CLASS: &str = "item-checkbox-checked";
/// Row class mirroring the disabled state.
pub const ITEM_DISABLED_CLASS: &str = "item-checkbox-disabled";
