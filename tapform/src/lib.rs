pub mod config;
pub mod events;
pub mod form;
pub mod input;
pub mod item;
pub mod redraw;
pub mod state;
pub mod widgets;

pub mod prelude {
    pub use crate::config::{Config, ConfigError, Mode};
    pub use crate::events::{EventResult, InputEvent};
    pub use crate::form::{FieldError, Form, ValidationResult};
    pub use crate::input::{BindableValue, InputKey, TapInput};
    pub use crate::item::{Item, ListRow};
    pub use crate::redraw::{RedrawReceiver, RedrawSender};
    pub use crate::state::State;
    pub use crate::widgets::Checkbox;

    pub use tapdom::{DomEvent, Element, Event, FocusState, Key, Modifiers};
}
