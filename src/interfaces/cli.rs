use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "trs")]
#[command(about = "Translate texts and detect their language.")]
#[command(version)]
pub struct Cli {
    /// Destination language abbreviation, e.g. pl
    #[arg(short = 't', long = "to", value_name = "LANG")]
    pub to: Option<String>,

    /// Source language abbreviation; detected when omitted
    #[arg(short = 'f', long = "from", value_name = "LANG", requires = "to")]
    pub from: Option<String>,

    /// Detect the language of the text instead of translating it
    #[arg(short = 'd', long, conflicts_with = "to")]
    pub detect: bool,

    /// List supported languages
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Text to translate or detect
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}
