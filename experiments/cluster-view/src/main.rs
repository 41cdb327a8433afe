//! Demo pipeline: synthetic cluster labels -> pseudo-colored GIF -> display.
//!
//! Usage:
//!   cargo run --bin cluster-view -- [output.gif] [--headless]
//!
//! Generates an animated label sequence (two clusters orbiting on a
//! background), writes it as a GIF, then shows the first frame, the looping
//! animation and an eigenspace scatter plot. `--headless` skips the windows.

use base::{Vec2, log};
use viz::{
    DEFAULT_DISPLAY_WIDTH, DisplayWindow, labels_to_images, load_animation, plot_eigenspace,
    save_animation,
};

const HEIGHT: usize = 100;
const WIDTH: usize = 100;
const FRAMES: usize = 12;
const K: usize = 3;

/// Small LCG, enough for scattering demo points
struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f32(&mut self) -> f32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as f32) / ((1u64 << 31) as f32)
    }
}

// Two discs orbiting the image center on a background of label 0
fn synth_labels() -> Vec<Vec<usize>> {
    let (cx, cy) = (WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0);
    let orbit = 25.0;
    let radius = 15.0f32;

    (0..FRAMES)
        .map(|f| {
            let angle = f as f32 / FRAMES as f32 * std::f32::consts::TAU;
            let c1 = (cx + orbit * angle.cos(), cy + orbit * angle.sin());
            let c2 = (cx - orbit * angle.cos(), cy - orbit * angle.sin());

            let mut frame = Vec::with_capacity(HEIGHT * WIDTH);
            for y in 0..HEIGHT {
                for x in 0..WIDTH {
                    let d1 = (x as f32 - c1.0).hypot(y as f32 - c1.1);
                    let d2 = (x as f32 - c2.0).hypot(y as f32 - c2.1);
                    let label = if d1 < radius {
                        1
                    } else if d2 < radius {
                        2
                    } else {
                        0
                    };
                    frame.push(label);
                }
            }
            frame
        })
        .collect()
}

// Three blobs in a fake 2D eigenspace
fn synth_eigenspace() -> (Vec<Vec2<f32>>, Vec<usize>) {
    let centers = [
        Vec2::new(-1.0f32, -1.0),
        Vec2::new(1.0, -0.5),
        Vec2::new(0.0, 1.2),
    ];
    let mut rng = SimpleRng::new(42);
    let mut points = Vec::new();
    let mut labels = Vec::new();
    for (i, center) in centers.iter().enumerate() {
        for _ in 0..200 {
            let jitter = Vec2::new(rng.next_f32() - 0.5, rng.next_f32() - 0.5) * 0.6;
            points.push(*center + jitter);
            labels.push(i);
        }
    }
    (points, labels)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    base::init_stdout_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let headless = args.iter().any(|a| a == "--headless");
    let output = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .cloned()
        .unwrap_or_else(|| "cluster_rollout.gif".to_string());

    log::info!("synthesizing {} frames of {}x{} labels, k={}", FRAMES, WIDTH, HEIGHT, K);
    let labels = synth_labels();
    let images = labels_to_images(&labels, K, HEIGHT, WIDTH)?;

    save_animation(&images, &output)?;
    let animation = load_animation(&output, DEFAULT_DISPLAY_WIDTH)?;
    log::info!(
        "reloaded {}: {} frames at {}ms delay",
        output,
        animation.frames.len(),
        animation.delay_ms
    );

    let (points, point_labels) = synth_eigenspace();
    let canvas = plot_eigenspace(&points, K, &point_labels)?;

    if headless {
        log::info!("headless run, skipping display");
        return Ok(());
    }

    let mut window = DisplayWindow::new("Cluster frame 0 - ESC to exit", WIDTH, HEIGHT)?;
    window.show_frame(&images, 0)?;
    window.wait();

    let mut window = DisplayWindow::new(
        "Cluster animation - ESC to exit",
        animation.width,
        animation.height,
    )?;
    window.play(&animation)?;

    let mut window = DisplayWindow::new(
        "Eigenspace - ESC to exit",
        viz::scatter::CANVAS_SIZE,
        viz::scatter::CANVAS_SIZE,
    )?;
    window.show_image(&canvas)?;
    window.wait();

    Ok(())
}
