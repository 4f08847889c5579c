pub mod color;
pub mod configuration;
pub mod params;
pub mod pixel_buffer;
pub mod store;
pub mod transforms;
pub mod viewport;

pub use color::{
    band_weights, intensity_falloff, wavelength_to_tint, ColorTint, VISIBLE_MAX_NM,
    VISIBLE_MIN_NM,
};
pub use configuration::{NewConfiguration, SavedConfiguration};
pub use params::{OpticalParameters, ParameterError, ParameterRange};
pub use pixel_buffer::{PixelBuffer, BYTES_PER_PIXEL};
pub use store::{now_ms, Clock, ConfigurationStore, MemoryStore, StoreError};
pub use transforms::{ScreenMapping, DEFAULT_PHYSICAL_WIDTH_MM};
pub use viewport::ViewportSize;
