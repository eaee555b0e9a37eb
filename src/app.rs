use std::thread;
use std::time::Duration;

use sdl2::event::Event;
use sdl2::Sdl;
use tracing::{debug, info};

use crate::buttons;
use crate::controller::{stick_position, Registry, Stick};
use crate::error::{Result, VizError};
use crate::render;

const WINDOW_TITLE: &str = "sdl controller";
const FRAME_DELAY: Duration = Duration::from_millis(16);

/// Create the window, bind a controller if one is present, and run the
/// poll/render loop until a quit event arrives.
pub fn run(sdl: &Sdl) -> Result<()> {
    let video = sdl.video().map_err(VizError::Init)?;
    let pads = sdl.game_controller().map_err(VizError::Init)?;

    let window = video
        .window(WINDOW_TITLE, render::SCREEN_WIDTH, render::SCREEN_HEIGHT)
        .position_centered()
        .build()?;

    let mut registry = Registry::new(pads);
    // Device-added events are not delivered for controllers that were already
    // connected at init, so scan once up front.
    registry.scan();

    let mut event_pump = sdl.event_pump().map_err(VizError::Init)?;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::ControllerDeviceAdded { which, .. } => registry.bind_added(which),
                Event::ControllerDeviceRemoved { which, .. } => registry.handle_removed(which),
                Event::ControllerButtonDown { which, button, .. } => {
                    if registry.matches(which) {
                        match buttons::press_line(button) {
                            Some(line) => println!("{line}"),
                            None => debug!("unmapped button {button:?}"),
                        }
                    }
                }
                _ => {}
            }
        }

        let mut surface = window.surface(&event_pump).map_err(VizError::Sdl)?;
        render::clear(&mut surface).map_err(VizError::Sdl)?;

        if let Some(pad) = registry.active() {
            let left = stick_position(pad, Stick::Left);
            render::render_stick(&mut surface, render::LEFT_ANCHOR, left)
                .map_err(VizError::Sdl)?;

            let right = stick_position(pad, Stick::Right);
            render::render_stick(&mut surface, render::RIGHT_ANCHOR, right)
                .map_err(VizError::Sdl)?;
        }

        surface.update_window().map_err(VizError::Sdl)?;

        thread::sleep(FRAME_DELAY);
    }

    info!("quit requested, shutting down");
    Ok(())
}
