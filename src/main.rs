mod animal;
mod app;
mod camera;
mod daynight;
mod ecs;
mod host;

fn main() {
    env_logger::init();
    log::info!("farmtoy starting up");

    if let Err(e) = app::run() {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}
