pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod text;

pub use element::{Content, Element, Role, INVISIBLE};
pub use event::{resolve, Event, Key, Modifiers, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use layout::{LayoutResult, Rect};
