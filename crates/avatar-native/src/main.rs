use avatar_core::{
    DrawList, EngineConfig, EyeConfig, Mode, ModeSelector, PointerTracker, Visualizer,
    DEFAULT_SIZE_PX,
};
use avatar_native::{eye_instances, particle_instances, RedrawScheduler};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

mod gpu;

use gpu::GpuState;

// Share of the window's shorter side the avatar fills.
const AVATAR_FILL: f32 = 0.8;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(Mode::default().label())
        .with_inner_size(LogicalSize::new(540.0, 540.0))
        .build(&event_loop)?;
    let window = &window;

    let mut gpu = pollster::block_on(GpuState::new(window))?;
    let size = DEFAULT_SIZE_PX;
    let started = Instant::now();

    let mut visualizer = Visualizer::new(
        RedrawScheduler::new(move || window.request_redraw()),
        EngineConfig::default(),
    );
    let changed: Rc<Cell<Option<Mode>>> = Rc::new(Cell::new(None));
    let mut selector = ModeSelector::new();
    {
        let changed = changed.clone();
        selector.subscribe(move |mode| changed.set(Some(mode)));
    }
    let mut tracker = PointerTracker::new(EyeConfig::default());
    let mut list = DrawList::new();
    let mut instances = Vec::new();

    visualizer.start(selector.current(), size);
    log::info!("arrow keys or [ ] switch modes, Esc quits");

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, .. } = event else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                visualizer.stop();
                elwt.exit();
            }
            WindowEvent::Resized(new_size) => {
                gpu.resize(new_size);
                window.request_redraw();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                match logical_key.as_ref() {
                    Key::Named(NamedKey::ArrowRight) | Key::Character("]") => {
                        selector.next();
                    }
                    Key::Named(NamedKey::ArrowLeft) | Key::Character("[") => {
                        selector.previous();
                    }
                    Key::Named(NamedKey::Escape) => {
                        visualizer.stop();
                        elwt.exit();
                    }
                    _ => {}
                }
                if let Some(mode) = changed.take() {
                    window.set_title(mode.label());
                    tracker.reset();
                    visualizer.start(mode, size);
                    window.request_redraw();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if visualizer.mode() == Some(Mode::Eye) {
                    let rect = gpu.placement(size, AVATAR_FILL).rect(size);
                    let pointer = Vec2::new(position.x as f32, position.y as f32);
                    if tracker.update(rect, pointer).is_some() {
                        window.request_redraw();
                    }
                }
            }
            WindowEvent::CursorLeft { .. } => {
                tracker.reset();
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                let now_ms = started.elapsed().as_secs_f64() * 1000.0;
                for handle in visualizer.scheduler_mut().take_due() {
                    visualizer.on_frame(handle, now_ms, &mut list);
                }
                let placement = gpu.placement(size, AVATAR_FILL);
                if visualizer.mode() == Some(Mode::Eye) {
                    eye_instances(size, tracker.transform(), placement.scale, &mut instances);
                } else {
                    particle_instances(&list, size, &mut instances);
                }
                match gpu.render(&instances, placement) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost) => gpu.resize(window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
                }
            }
            _ => {}
        }
    })?;
    Ok(())
}
