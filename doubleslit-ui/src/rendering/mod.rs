pub mod canvas_utils;
mod frame_presenter;

pub use frame_presenter::FramePresenter;
