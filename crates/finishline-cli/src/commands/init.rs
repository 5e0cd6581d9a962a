use clap::Args;
use finishline_core::Scene;
use std::path::PathBuf;

#[derive(Args)]
pub struct InitArgs {
    /// Where to write the scene
    path: PathBuf,
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

pub fn run(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.path.exists() && !args.force {
        return Err(format!("{} already exists (use --force to overwrite)", args.path.display()).into());
    }
    Scene::example().save(&args.path)?;
    println!("scene written to {}", args.path.display());
    Ok(())
}
