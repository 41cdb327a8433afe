//! Cluster-assignment visualization for the specview workspace.
//!
//! Turns per-pixel integer cluster labels into pseudo-colored image tensors,
//! shows single frames or 2D eigenspace scatter plots in a display window,
//! and encodes frame sequences as animated GIFs.
//!
//! All image tensors use FHWC layout: `[frames, height, width, 3]`, RGB
//! channels as `f32` in `[0, 1]`.

pub mod display;
pub mod error;
pub mod gif;
pub mod images;
pub mod palette;
pub mod scatter;

pub use display::{DisplayWindow, frame_to_argb, image_to_argb};
pub use error::VizError;
pub use gif::{Animation, DEFAULT_DISPLAY_WIDTH, FRAMES_PER_SECOND, load_animation, save_animation};
pub use images::labels_to_images;
pub use palette::PALETTE;
pub use scatter::plot_eigenspace;
