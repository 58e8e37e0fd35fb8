use clap::Parser;

#[derive(Debug, Parser)]
#[clap(about = "Inline #include \"...\" directives of a text file", version)]
pub struct Arguments {
    #[clap(help = "Set a file to expand")]
    pub file: Option<String>,
    #[clap(short = 'C', help = "Set a working directory")]
    pub directory: Option<String>,
    #[clap(long, help = "Set a log prefix")]
    pub log_prefix: Option<String>,
    #[clap(long, help = "Show debug logs")]
    pub debug: bool,
    #[clap(long, help = "Show profile timings")]
    pub profile: bool,
}
