// File: crates/window-demo/src/main.rs
// Summary: Live time-series window rendered through chart-render-skia and blitted with softbuffer.
// Controls: drag a rectangle to zoom, hold ctrl + left button to zoom toward the pointer,
// right-click to reset, space to pause the feed, `f` to toggle y freezing.

use anyhow::{anyhow, Result};
use chart_core::{Interaction, InteractionEvent, Plot, PointerInput, RectI32, Setting};
use chart_render_skia::{render_to_rgba8_with, RasterOptions};
use std::num::NonZeroU32;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 640;
const CAPACITY: usize = 400;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Constellation Plot - Live Time Series")
        .with_inner_size(winit::dpi::PhysicalSize::new(WIDTH, HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;
    let w = NonZeroU32::new(WIDTH).ok_or_else(|| anyhow!("zero window width"))?;
    let h = NonZeroU32::new(HEIGHT).ok_or_else(|| anyhow!("zero window height"))?;
    surface.resize(w, h).map_err(|e| anyhow!("softbuffer resize: {e}"))?;

    let mut plot = Plot::time_series(RectI32::from_ltrb(70, 30, WIDTH as i32 - 30, HEIGHT as i32 - 50), CAPACITY);
    plot.set(Setting::ShowAxes, true).set(Setting::ShowBorder, true);
    let opts = RasterOptions { width: WIDTH as i32, height: HEIGHT as i32, background: None };

    let mut ui = Interaction::new();
    let mut input = PointerInput::default();
    let mut t = 0.0_f64;
    let mut paused = false;
    info!("drag to zoom, ctrl+left to zoom in, right-click to reset, space to pause, f to freeze y");

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::CursorMoved { position, .. } => {
                    input.x = position.x;
                    input.y = position.y;
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    let down = state == ElementState::Pressed;
                    match button {
                        MouseButton::Left => input.left = down,
                        MouseButton::Right => input.right = down,
                        _ => {}
                    }
                }
                WindowEvent::ModifiersChanged(mods) => input.ctrl = mods.ctrl(),
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Space => paused = !paused,
                    VirtualKeyCode::F => {
                        let frozen = !plot.config().freeze_y_scale;
                        plot.set(Setting::FreezeYScale, frozen);
                        info!(frozen, "y scale freeze toggled");
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::MainEventsCleared => window.request_redraw(),
            Event::RedrawRequested(_) => {
                if !paused {
                    for _ in 0..2 {
                        t += 0.05;
                        let y = (t * 0.8).sin() * 10.0 + (t * 3.1).cos() * 2.0;
                        if let Ok(ds) = plot.plot(t, y) {
                            ds.style("-").stroke_color("blue");
                        }
                    }
                }

                match ui.update(&mut plot, &input) {
                    InteractionEvent::Rejected(e) => info!("zoom ignored: {e}"),
                    InteractionEvent::None => {}
                    other => info!(?other, "viewport changed"),
                }

                let theme = *plot.theme();
                let rendered = render_to_rgba8_with(&mut plot, &opts, |s| ui.draw_overlay(s, &theme));
                let rgba = match rendered {
                    Ok((rgba, ..)) => rgba,
                    Err(e) => {
                        error!("render failed: {e:#}");
                        *cf = ControlFlow::Exit;
                        return;
                    }
                };
                let mut frame = match surface.buffer_mut() {
                    Ok(frame) => frame,
                    Err(e) => {
                        error!("softbuffer frame: {e}");
                        *cf = ControlFlow::Exit;
                        return;
                    }
                };
                // softbuffer pixels are 0x00RRGGBB.
                for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
                    *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
                }
                if let Err(e) = frame.present() {
                    error!("present error: {e}");
                }
            }
            _ => {}
        }
    });
}
