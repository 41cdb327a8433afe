use std::time::Duration;

use base::Tensor;
use minifb::{Key, Window, WindowOptions};

use crate::error::VizError;
use crate::gif::Animation;

fn pack_u32(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

fn float_rgb_to_u32(data: &[f32]) -> Vec<u32> {
    data.chunks_exact(3)
        .map(|px| {
            let r = (px[0].clamp(0.0, 1.0) * 255.0) as u8;
            let g = (px[1].clamp(0.0, 1.0) * 255.0) as u8;
            let b = (px[2].clamp(0.0, 1.0) * 255.0) as u8;
            pack_u32(r, g, b)
        })
        .collect()
}

/// Packs one frame of a `[frames, height, width, 3]` float tensor into a
/// 0x00RRGGBB buffer for the display window.
///
/// Returns the buffer with its width and height.
///
/// # Errors
///
/// - `BadImageShape` when the tensor is not `[frames, height, width, 3]`.
/// - `FrameOutOfRange` when `frame >= frames`.
pub fn frame_to_argb(
    images: &Tensor<f32>,
    frame: usize,
) -> Result<(Vec<u32>, usize, usize), VizError> {
    let &[frames, height, width, 3] = images.shape.as_slice() else {
        return Err(VizError::BadImageShape {
            shape: images.shape.clone(),
        });
    };
    if frame >= frames {
        return Err(VizError::FrameOutOfRange { frame, frames });
    }
    let start = frame * height * width * 3;
    let end = start + height * width * 3;
    Ok((float_rgb_to_u32(&images.data[start..end]), width, height))
}

/// Packs a single `[height, width, 3]` float tensor into a 0x00RRGGBB buffer.
pub fn image_to_argb(image: &Tensor<f32>) -> Result<(Vec<u32>, usize, usize), VizError> {
    let &[height, width, 3] = image.shape.as_slice() else {
        return Err(VizError::BadImageShape {
            shape: image.shape.clone(),
        });
    };
    Ok((float_rgb_to_u32(&image.data), width, height))
}

fn u8_rgb_to_u32(data: &[u8]) -> Vec<u32> {
    data.chunks_exact(3)
        .map(|px| pack_u32(px[0], px[1], px[2]))
        .collect()
}

/// An explicit display context wrapping one window.
///
/// Every render call goes through a handle the caller creates and drops;
/// there is no process-global "current figure".
pub struct DisplayWindow {
    window: Window,
}

impl DisplayWindow {
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, VizError> {
        let window = Window::new(title, width, height, WindowOptions::default())?;
        Ok(Self { window })
    }

    /// Renders frame `frame` of an image tensor.
    ///
    /// # Errors
    ///
    /// Fails when `frame` is out of range, the tensor is not
    /// `[frames, height, width, 3]`, or the window rejects the buffer.
    pub fn show_frame(&mut self, images: &Tensor<f32>, frame: usize) -> Result<(), VizError> {
        let (buf, width, height) = frame_to_argb(images, frame)?;
        self.window.update_with_buffer(&buf, width, height)?;
        Ok(())
    }

    /// Renders a single `[height, width, 3]` tensor (e.g. a scatter canvas).
    pub fn show_image(&mut self, image: &Tensor<f32>) -> Result<(), VizError> {
        let (buf, width, height) = image_to_argb(image)?;
        self.window.update_with_buffer(&buf, width, height)?;
        Ok(())
    }

    /// Plays a loaded animation on a loop at its native frame delay until
    /// the window is closed or ESC is pressed.
    pub fn play(&mut self, animation: &Animation) -> Result<(), VizError> {
        if animation.frames.is_empty() {
            return Err(VizError::EmptyAnimation);
        }
        let delay = Duration::from_millis(animation.delay_ms.max(1) as u64);
        'outer: loop {
            for frame in &animation.frames {
                if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
                    break 'outer;
                }
                let buf = u8_rgb_to_u32(&frame.data);
                self.window
                    .update_with_buffer(&buf, animation.width, animation.height)?;
                std::thread::sleep(delay);
            }
        }
        Ok(())
    }

    /// Blocks until the window is closed or ESC is pressed.
    pub fn wait(&mut self) {
        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            self.window.update();
        }
    }
}
