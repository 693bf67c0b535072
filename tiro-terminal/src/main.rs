/// TIRO Terminal Demo - OBJ viewer with a fly camera
///
/// Usage: tiro-terminal [--fps N] [--free-pitch] [MODEL.obj]
/// Without a model a cube is shown. See `--help` for the controls.
use anyhow::Context;
use tiro_core::{obj, Mesh};
use tiro_terminal::config::{Config, USAGE};
use tiro_terminal::TerminalApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_args(std::env::args().skip(1)).context("invalid arguments (see --help)")?;
    if config.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mesh = match &config.model_path {
        Some(path) => {
            println!("TIRO Terminal Renderer - Loading {}...", path.display());
            obj::load(path).with_context(|| format!("failed to load model '{}'", path.display()))?
        }
        None => {
            log::info!("no model given, using the default cube");
            Mesh::cube(2.0)
        }
    };
    if mesh.is_empty() {
        log::warn!("model has no faces, nothing will be drawn");
    }

    println!("Loaded {} triangles", mesh.triangle_count());
    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    // Run the terminal app
    let mut app = TerminalApp::new(mesh, &config).context("failed to query the terminal size")?;
    app.run().context("terminal renderer failed")?;

    println!("Thank you for using TIRO Terminal Renderer!");
    Ok(())
}
