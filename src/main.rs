use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Required for certain controllers to work on Windows
    sdl2::hint::set("SDL_JOYSTICK_THREAD", "1");

    let sdl = match sdl2::init() {
        Ok(sdl) => sdl,
        Err(e) => {
            error!("could not initialize sdl2: {e}");
            return ExitCode::from(1);
        }
    };

    match stickview::run(&sdl) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(1)
        }
    }
}
