use clap::Args;
use finishline_core::Evaluation;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args)]
pub struct RunArgs {
    /// Scene file (TOML)
    scene: PathBuf,
    /// Override the viewport's scroll offset
    #[arg(long, allow_hyphen_values = true)]
    scroll: Option<f64>,
    /// Override the viewport width
    #[arg(long)]
    width: Option<f64>,
    /// Evaluate this many times in a row
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    repeat: u32,
}

#[derive(Serialize)]
struct RunReport {
    evaluation: Evaluation,
    active: bool,
    node_classes: Vec<String>,
    inline_top: Option<f64>,
    page_classes: Vec<String>,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let scene = super::load_scene(&args.scene, args.scroll, args.width)?;
    let (mut page, mut zone) = scene.instantiate()?;

    let mut evaluation = zone.run(&mut page);
    for _ in 1..args.repeat {
        evaluation = zone.run(&mut page);
    }

    let report = RunReport {
        evaluation,
        active: zone.is_active(&page),
        node_classes: page.classes(&scene.zone.node),
        inline_top: page.inline_top_of(&scene.zone.node),
        page_classes: zone.page_classes().classes(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
