use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 20)]
    pub width: usize,

    #[arg(long, default_value_t = 20)]
    pub height: usize,

    #[arg(long, default_value_t = 80)]
    pub num_obstacles: usize,

    /// Seed for reproducible grid generation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Comma-separated algorithms to compare, or "all".
    #[arg(long, default_value = "all")]
    pub algorithms: String,

    /// Skip the per-algorithm grid overlays.
    #[arg(long, default_value_t = false)]
    pub no_grid: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
