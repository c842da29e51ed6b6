pub mod callbacks;
pub mod controller;
pub mod double_click;
pub mod event;
pub mod input_adapter;
pub mod mode;

pub use callbacks::Callbacks;
pub use controller::{TrackballController, PAN_Z_BUTTON};
pub use double_click::{DoubleClick, DOUBLE_CLICK_WINDOW};
pub use event::{ButtonState, InputEvent, MouseButton, SpecialKey, WheelDirection};
pub use input_adapter::WinitInput;
pub use mode::{InteractionMode, ModeEvaluator, Modifiers};
