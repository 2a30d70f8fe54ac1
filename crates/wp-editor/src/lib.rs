pub mod controller;
pub mod form;
pub mod input;
pub mod shortcuts;

pub use controller::{InteractionController, InteractionState, Response};
pub use form::{EditRequest, FormError, FormSubmission};
pub use input::{InputEvent, PointerButton};
pub use shortcuts::{ShortcutAction, ShortcutMap};
