use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "primechunk",
    author = "\n",
    about = "    Generate primes lazily in fixed-size, resumable chunks.",
    raw(setting = "structopt::clap::AppSettings::AllowNegativeNumbers")
)]
pub struct Opt {
    /// Emit primes at or above this value
    #[structopt(short = "s", long = "start", default_value = "2")]
    pub start: i64,

    /// Number of primes per chunk
    #[structopt(short = "c", long = "count", default_value = "100")]
    pub count: usize,

    /// Number of chunks to emit
    #[structopt(short = "n", long = "chunks", default_value = "1")]
    pub chunks: usize,
}
