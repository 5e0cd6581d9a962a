use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct SweepArgs {
    /// Scene file (TOML)
    scene: PathBuf,
    /// First scroll offset
    #[arg(long, allow_hyphen_values = true)]
    from: f64,
    /// Last scroll offset
    #[arg(long, allow_hyphen_values = true)]
    to: f64,
    /// Distance between offsets
    #[arg(long, default_value = "1")]
    step: f64,
    /// Override the viewport width
    #[arg(long)]
    width: Option<f64>,
}

/// Prints one JSON line per transition.
pub fn run(args: SweepArgs) -> Result<(), Box<dyn std::error::Error>> {
    let scene = super::load_scene(&args.scene, None, args.width)?;
    let (mut page, mut zone) = scene.instantiate()?;

    let transitions = finishline_core::sweep(&mut zone, &mut page, args.from, args.to, args.step)?;
    for transition in &transitions {
        println!("{}", serde_json::to_string(transition)?);
    }
    if transitions.is_empty() {
        eprintln!("no state changes between {} and {}", args.from, args.to);
    }
    Ok(())
}
