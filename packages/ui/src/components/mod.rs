//! Shared form controls and notification primitives.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod label;
pub use label::Label;

mod spinner;
pub use spinner::Spinner;

mod toast;
pub use toast::{use_toast, Toast, ToastApi, ToastKind, ToastProvider};
