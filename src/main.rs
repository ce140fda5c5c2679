use anyhow::Result;
use log::{info, trace};
use side_shooter::engine::input::KeyboardEvent;
use side_shooter::engine::renderer::SpriteBatch;
use side_shooter::game::{GameSession, PlayerConfig};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::ModifiersState,
    window::WindowBuilder,
};

fn main() -> Result<()> {
    // Initialize logger, RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Side Shooter...");

    let mut session = GameSession::new(PlayerConfig::default())?;
    let mut batch = SpriteBatch::new();
    let mut modifiers = ModifiersState::empty();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Side Shooter")
        .with_inner_size(winit::dpi::LogicalSize::new(800, 400))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::ModifiersChanged(new_modifiers),
                ..
            } => {
                modifiers = new_modifiers.state();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                session.handle_key(&KeyboardEvent::from_winit(&event, modifiers));
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                batch.clear();
                session.draw(&mut batch);
                trace!(
                    "Frame {}: {} sprites, player at {}",
                    session.frame_count(),
                    batch.len(),
                    session.player().position()
                );
            }
            Event::AboutToWait => {
                session.begin_frame();
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
