use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Scene file (TOML)
    scene: PathBuf,
    /// Print a single option by dotted key instead of the whole record
    #[arg(long)]
    key: Option<String>,
}

pub fn run(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let scene = super::load_scene(&args.scene, None, None)?;
    let (_page, zone) = scene.instantiate()?;
    zone.log_options();
    if zone.is_inert() {
        eprintln!("warning: bound element '{}' not found in scene", scene.zone.node);
    }
    match args.key {
        Some(key) => {
            let value = scene
                .zone
                .get(&key)
                .ok_or_else(|| format!("unknown option '{key}'"))?;
            println!("{value}");
        }
        None => println!("{}", serde_json::to_string_pretty(&scene.zone)?),
    }
    Ok(())
}
