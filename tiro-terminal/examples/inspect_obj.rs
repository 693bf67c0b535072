/// Example: Load an OBJ file and print what a rendering backend would receive
///
/// Usage: cargo run --example inspect_obj -- path/to/model.obj
use std::env;
use std::process::ExitCode;
use tiro_core::{obj, Camera, Projection};

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <obj-file>", args[0]);
        return ExitCode::FAILURE;
    }

    let mesh = match obj::load(&args[1]) {
        Ok(mesh) => mesh,
        Err(e) => {
            eprintln!("Failed to load {}: {}", args[1], e);
            return ExitCode::FAILURE;
        }
    };

    println!("{} triangles, {} floats in the vertex buffer", mesh.triangle_count(), mesh.as_slice().len());
    if let Some((min, max)) = mesh.bounds() {
        println!("bounds: {} .. {}", min, max);
    }

    let camera = Camera::default();
    let projection = Projection::new(600, 600);
    println!("view:\n{}", camera.view_matrix());
    println!("projection:\n{}", projection.matrix(camera.zoom));
    ExitCode::SUCCESS
}
