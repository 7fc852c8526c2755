use anyhow::Result;
use agrimap::{color_for, Category};

use crate::cli::{ColorArgs, ColorCategory};

pub fn run(_cli: &crate::cli::Cli, args: &ColorArgs) -> Result<()> {
    let category = match args.category {
        ColorCategory::Crop => Category::Crop,
        ColorCategory::Fertility => Category::Fertility,
    };
    println!("{}", color_for(category, &args.value));
    Ok(())
}
