use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct SnapshotArgs {
    /// Scene file (TOML)
    scene: PathBuf,
    /// Override the viewport's scroll offset
    #[arg(long, allow_hyphen_values = true)]
    scroll: Option<f64>,
    /// Override the viewport width
    #[arg(long)]
    width: Option<f64>,
}

pub fn run(args: SnapshotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let scene = super::load_scene(&args.scene, args.scroll, args.width)?;
    let (mut page, mut zone) = scene.instantiate()?;
    zone.run(&mut page);
    println!("{}", serde_json::to_string_pretty(&zone.snapshot(&page))?);
    Ok(())
}
