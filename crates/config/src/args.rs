use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to .env file (e.g., .env.production)
    #[arg(short, long, default_value = ".env")]
    pub env_file: String,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Load the dotenv file named by `--env-file`. A missing file is not
    /// an error; the process environment simply stands on its own.
    pub fn load_env_file(&self) {
        dotenv::from_filename(&self.env_file).ok();
    }
}
