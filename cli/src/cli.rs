use std::path::PathBuf;

/// Agricultural field map CLI: filter, assign and summarize surveyed locations
#[derive(clap::Parser, Debug)]
#[command(name = "agrimap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Select locations matching filter criteria
    Filter(FilterArgs),

    /// Assign each location to the first district containing it
    Assign(AssignArgs),

    /// Generate a reproducible synthetic location dataset
    Sample(SampleArgs),

    /// Summarize (optionally filtered) locations
    Summary(SummaryArgs),

    /// Print the marker color for a crop or fertility level
    Color(ColorArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum Mode { And, Or }

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum OutputFormat { Json, Geojson }

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum ColorCategory { Crop, Fertility }

/// Filter criteria: an optional JSON file, overridden by individual flags.
#[derive(clap::Args, Debug, Default)]
pub struct CriteriaArgs {
    /// JSON criteria file (cropType, season, soilType, fertility, npkMin, npkMax, ndviRange, multiCriteriaMode)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub criteria: Option<PathBuf>,

    /// Crop identifier, e.g. rice
    #[arg(long)]
    pub crop: Option<String>,

    /// Season, e.g. Kharif
    #[arg(long)]
    pub season: Option<String>,

    /// Soil type, e.g. "Black Soil"
    #[arg(long)]
    pub soil: Option<String>,

    /// Fertility level: High, Medium or Low
    #[arg(long)]
    pub fertility: Option<String>,

    /// Inclusive NDVI range
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], allow_negative_numbers = true)]
    pub ndvi: Option<Vec<f64>>,

    /// Lower NPK bound (only applied together with --npk-max)
    #[arg(long, num_args = 3, value_names = ["N", "P", "K"])]
    pub npk_min: Option<Vec<f64>>,

    /// Upper NPK bound (only applied together with --npk-min)
    #[arg(long, num_args = 3, value_names = ["N", "P", "K"])]
    pub npk_max: Option<Vec<f64>>,

    /// How active criteria combine
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
}

/// District boundaries: a GeoJSON file, or the built-in Tamil Nadu districts.
#[derive(clap::Args, Debug, Default)]
pub struct DistrictArgs {
    /// GeoJSON FeatureCollection of Polygon districts
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub districts: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Default)]
pub struct OutputArgs {
    /// Output file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct FilterArgs {
    /// Input location records (JSON array)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub locations: PathBuf,

    #[command(flatten)]
    pub criteria: CriteriaArgs,

    /// Restrict to locations inside this district id
    #[arg(long)]
    pub district: Option<String>,

    #[command(flatten)]
    pub districts: DistrictArgs,

    /// Apply the map display rule: nothing is shown until a criterion is active
    #[arg(long)]
    pub visible: bool,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug)]
pub struct AssignArgs {
    /// Input location records (JSON array)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub locations: PathBuf,

    #[command(flatten)]
    pub districts: DistrictArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug)]
pub struct SampleArgs {
    /// Number of records to generate
    #[arg(short = 'n', long, default_value_t = 750)]
    pub count: usize,

    /// Random seed; equal seeds give equal datasets
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// Input location records (JSON array)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub locations: PathBuf,

    #[command(flatten)]
    pub criteria: CriteriaArgs,

    /// Restrict to locations inside this district id
    #[arg(long)]
    pub district: Option<String>,

    #[command(flatten)]
    pub districts: DistrictArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug)]
pub struct ColorArgs {
    /// Attribute the value belongs to
    #[arg(value_enum)]
    pub category: ColorCategory,

    /// Crop identifier or fertility level
    pub value: String,
}
