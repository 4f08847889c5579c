mod confirm_dialog;
mod interference_canvas;
mod load_dialog;
mod parameter_panel;
mod parameter_slider;
mod save_dialog;
mod toast;

pub use confirm_dialog::ConfirmDialog;
pub use interference_canvas::InterferenceCanvas;
pub use load_dialog::LoadDialog;
pub use parameter_panel::ParameterPanel;
pub use parameter_slider::ParameterSlider;
pub use save_dialog::SaveDialog;
pub use toast::{Toast, ToastKind, ToastMessage};
