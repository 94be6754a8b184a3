use clap::Subcommand;
use std::path::PathBuf;

pub mod direct;
pub mod info;
pub mod scan;

#[derive(Subcommand)]
pub enum Commands {
    /// Find mod.info units and their scripts under a directory
    Scan {
        /// Root directory to scan
        root: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Scan config file (defaults to luascout.toml inside ROOT when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report a missing or unreadable root as "no mods" instead of failing
        #[arg(long)]
        allow_missing_root: bool,
    },

    /// Collect scripts from a file or directory without a mod.info layout
    Direct {
        /// Script file or directory
        path: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show metadata read from a mod directory
    Info {
        /// Mod directory (containing mod.info, meta.ini or modinfo.txt)
        mod_dir: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Scan {
                root,
                json,
                config,
                allow_missing_root,
            } => scan::execute(root, config.as_deref(), *allow_missing_root, *json),

            Commands::Direct { path, json } => direct::execute(path, *json),

            Commands::Info { mod_dir, json } => info::execute(mod_dir, *json),
        }
    }
}
