use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use brick_shape::collision_shape;
use brick_types::{BrickDescriptor, BrickType};
use brickmesh::{build_mesh, obj};

#[derive(Parser, Debug)]
#[command(name = "brickmesh", about = "Emit a brick block mesh as Wavefront OBJ")]
struct Args {
    /// TOML descriptor file (brick_type, color, rotation_y_deg, detailed_model)
    #[arg(long, conflicts_with_all = ["brick", "color", "rotate"])]
    descriptor: Option<PathBuf>,
    /// Brick type name: brick_1x1, brick_2x2, brick_2x4, slope, corner
    #[arg(long, default_value = "brick_2x4")]
    brick: String,
    /// Packed RRGGBB hex color
    #[arg(long, default_value = "FF0000")]
    color: String,
    /// Yaw rotation in degrees
    #[arg(long, default_value_t = 0.0)]
    rotate: f32,
    /// Output path; stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,
}

fn descriptor_from(args: &Args) -> Result<BrickDescriptor, Box<dyn Error>> {
    if let Some(path) = &args.descriptor {
        let text = fs::read_to_string(path)?;
        return Ok(BrickDescriptor::from_toml_str(&text)?);
    }
    let ty = BrickType::from_name(&args.brick)
        .ok_or_else(|| format!("unknown brick type {:?}", args.brick))?;
    let mut d = BrickDescriptor::new(ty);
    d.color = u32::from_str_radix(args.color.trim_start_matches("0x"), 16)?;
    d.rotation_y_deg = args.rotate;
    Ok(d)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let d = descriptor_from(&args)?;
    let shape = collision_shape(d.brick_type);
    log::debug!(
        "{}: collision union of {} boxes, bounding {:?}",
        d.brick_type.name(),
        shape.boxes.len(),
        shape.bounding()
    );

    let mesh = build_mesh(&d);
    log::info!(
        "{}: {} primitives at {:.1} deg, color {:06X}",
        d.brick_type.name(),
        mesh.len(),
        d.rotation_y_deg,
        d.color
    );

    match &args.out {
        Some(path) => {
            let mut f = io::BufWriter::new(fs::File::create(path)?);
            obj::write_obj(&mut f, d.brick_type.name(), &mesh)?;
            f.flush()?;
            log::info!("wrote {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            obj::write_obj(&mut lock, d.brick_type.name(), &mesh)?;
        }
    }
    Ok(())
}
