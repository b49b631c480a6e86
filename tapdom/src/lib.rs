pub mod element;
pub mod event;
pub mod focus;
pub mod markup;

pub use element::{find_by_tag, find_element, Content, Element};
pub use event::{DomEvent, Event, Key, Modifiers};
pub use focus::{collect_focusable, FocusState};
pub use markup::to_markup;
