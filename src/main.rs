use anyhow::Result;
use clap::Parser;
use std::path::Path;

mod icon_gen;

#[derive(Debug, Parser)]
#[clap(
    name = "stop-icon-gen",
    version,
    about = "Generate the audio service stop icon for every Android density bucket"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    // Output always lands under ./android/app/src/main/res
    icon_gen::generate_icons(Path::new("."))
}
