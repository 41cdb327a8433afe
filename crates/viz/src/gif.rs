use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use base::Tensor;
use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::{AnimationDecoder, Delay, Frame, RgbaImage};

use crate::error::VizError;

/// Fixed playback rate for saved animations.
pub const FRAMES_PER_SECOND: u32 = 3;

/// Default display width for loaded animations.
pub const DEFAULT_DISPLAY_WIDTH: usize = 200;

/// A decoded animation rescaled for display.
///
/// Frames are `[height, width, 3]` RGB tensors, all the same size.
#[derive(Debug, Clone)]
pub struct Animation {
    pub frames: Vec<Tensor<u8>>,
    pub width: usize,
    pub height: usize,
    pub delay_ms: u32,
}

// Scale [0, 1] floats to 8-bit channels, truncating
fn frame_to_rgba(
    images: &Tensor<f32>,
    frame: usize,
    height: usize,
    width: usize,
) -> Result<RgbaImage, VizError> {
    let offset = frame * height * width * 3;
    let mut buf = Vec::with_capacity(height * width * 4);
    for px in 0..height * width {
        let idx = offset + px * 3;
        for c in 0..3 {
            buf.push((images.data[idx + c].clamp(0.0, 1.0) * 255.0) as u8);
        }
        buf.push(255);
    }
    RgbaImage::from_raw(width as u32, height as u32, buf)
        .ok_or_else(|| VizError::Encode("frame buffer does not match dimensions".into()))
}

/// Encodes a `[frames, height, width, 3]` float tensor as an animated GIF.
///
/// Channel values are clamped to `[0, 1]`, scaled by 255 and truncated to
/// 8 bits. The file at `path` is overwritten if it exists; playback runs at
/// 3 fps and repeats forever.
///
/// # Errors
///
/// - `BadImageShape` when the tensor is not `[frames, height, width, 3]`.
/// - `EmptyAnimation` when the tensor has zero frames.
/// - `Io` when the output file cannot be created.
/// - `Encode` when GIF encoding fails.
pub fn save_animation(images: &Tensor<f32>, path: impl AsRef<Path>) -> Result<(), VizError> {
    let path = path.as_ref();
    let &[frames, height, width, 3] = images.shape.as_slice() else {
        return Err(VizError::BadImageShape {
            shape: images.shape.clone(),
        });
    };
    if frames == 0 {
        return Err(VizError::EmptyAnimation);
    }

    let file = File::create(path)?;
    let mut encoder = GifEncoder::new(file);
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(|e| VizError::Encode(e.to_string()))?;

    let delay = Delay::from_numer_denom_ms(1000, FRAMES_PER_SECOND);
    for i in 0..frames {
        let rgba = frame_to_rgba(images, i, height, width)?;
        encoder
            .encode_frame(Frame::from_parts(rgba, 0, 0, delay))
            .map_err(|e| VizError::Encode(e.to_string()))?;
    }

    log::info!(
        "wrote {} frames ({}x{}) to {}",
        frames,
        width,
        height,
        path.display()
    );
    Ok(())
}

// Nearest-neighbor rescale of an RGBA frame to an RGB tensor of the target size
fn rescale_to_tensor(
    rgba: &RgbaImage,
    out_width: usize,
    out_height: usize,
) -> Result<Tensor<u8>, VizError> {
    let (src_w, src_h) = (rgba.width() as usize, rgba.height() as usize);
    let mut data = Vec::with_capacity(out_width * out_height * 3);
    for y in 0..out_height {
        let src_y = (y * src_h / out_height).min(src_h - 1);
        for x in 0..out_width {
            let src_x = (x * src_w / out_width).min(src_w - 1);
            let px = rgba.get_pixel(src_x as u32, src_y as u32);
            data.extend_from_slice(&px.0[..3]);
        }
    }
    Ok(Tensor::new(vec![out_height, out_width, 3], data)?)
}

/// Loads an animated GIF as a displayable handle.
///
/// Frames are decoded and rescaled to `display_width` by nearest neighbor,
/// preserving the aspect ratio; the native per-frame delay is kept. Use
/// `DEFAULT_DISPLAY_WIDTH` for notebook-sized output.
///
/// # Errors
///
/// - `Io` when the file cannot be opened.
/// - `Decode` when the file is not a decodable GIF.
/// - `EmptyAnimation` when the file contains no frames.
pub fn load_animation(path: impl AsRef<Path>, display_width: usize) -> Result<Animation, VizError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let decoder = GifDecoder::new(BufReader::new(file))?;
    let frames = decoder.into_frames().collect_frames()?;

    let Some(first) = frames.first() else {
        return Err(VizError::EmptyAnimation);
    };

    let (numer, denom) = first.delay().numer_denom_ms();
    let delay_ms = if denom == 0 { numer } else { numer / denom };

    let (src_w, src_h) = (
        first.buffer().width() as usize,
        first.buffer().height() as usize,
    );
    let out_width = display_width.max(1);
    let out_height = (src_h * out_width / src_w).max(1);

    let mut scaled = Vec::with_capacity(frames.len());
    for frame in &frames {
        scaled.push(rescale_to_tensor(frame.buffer(), out_width, out_height)?);
    }

    log::debug!(
        "loaded {} frames from {}, rescaled {}x{} -> {}x{}",
        scaled.len(),
        path.display(),
        src_w,
        src_h,
        out_width,
        out_height
    );

    Ok(Animation {
        frames: scaled,
        width: out_width,
        height: out_height,
        delay_ms,
    })
}
