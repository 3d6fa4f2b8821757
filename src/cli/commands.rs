// src/cli/commands.rs
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Start the API server
    Serve,

    /// Generate passwords
    Password(PasswordArgs),

    /// Score a password
    Strength {
        /// Password to analyze
        #[arg(required = true, allow_hyphen_values = true)]
        password: String,
    },

    /// Convert a color to every supported format
    Color(ColorArgs),

    /// Hash text with MD5, SHA-1, SHA-2 or SHA-3
    Hash {
        /// Text to hash
        #[arg(required = true)]
        text: String,

        /// md5, sha1, sha256, sha512, sha3-256 or sha3-512 (all when omitted)
        #[arg(long, short)]
        algorithm: Option<String>,
    },

    /// Convert a Unix timestamp (seconds or milliseconds)
    Timestamp {
        #[arg(required = true, allow_hyphen_values = true)]
        value: String,
    },

    /// Turn a Google Drive share link into a direct download link
    Drive {
        #[arg(required = true)]
        url: String,
    },

    /// Interactive menu
    Menu,
}

#[derive(Args, Debug, Default)]
pub struct PasswordArgs {
    /// Password length (4-128)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Exclude look-alike characters (i, I, l, 1, L, o, 0, O)
    #[arg(long)]
    pub exclude_similar: bool,

    /// Exclude brackets, quotes and punctuation from symbols
    #[arg(long)]
    pub exclude_ambiguous: bool,

    /// Minimum number of digits
    #[arg(long)]
    pub min_digits: Option<usize>,

    /// Minimum number of symbols
    #[arg(long)]
    pub min_symbols: Option<usize>,

    /// Number of passwords to generate
    #[arg(long, short, default_value_t = 1)]
    pub count: usize,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ColorArgs {
    /// Hex color such as #3b82f6
    pub hex: Option<String>,

    /// RGB components, e.g. 59,130,246
    #[arg(long)]
    pub rgb: Option<String>,

    /// HSL components, e.g. 217,91,60
    #[arg(long)]
    pub hsl: Option<String>,
}
