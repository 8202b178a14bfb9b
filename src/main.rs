//! Phasmo Roller entry point
//!
//! Native builds run a small CLI over file-backed storage. The web build is
//! driven from JS through `phasmo_roller::web`.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::{Parser, Subcommand};

    use phasmo_roller::{FileStore, Persisted, RollOutcome, Roller, Settings, catalog};

    #[derive(Parser)]
    #[command(name = "phasmo-roller")]
    #[command(about = "Roll to unlock Phasmophobia items")]
    struct Cli {
        /// JSON settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory holding saved progress
        #[arg(short, long, env = "PHASMO_ROLLER_DATA_DIR")]
        data_dir: Option<PathBuf>,

        /// Fixed RNG seed for reproducible rolls
        #[arg(long, env = "PHASMO_ROLLER_SEED")]
        seed: Option<u64>,

        /// Storage key (file name stem) for saved progress
        #[arg(long, env = "PHASMO_ROLLER_STORAGE_KEY")]
        storage_key: Option<String>,

        #[command(subcommand)]
        command: Option<Command>,
    }

    #[derive(Subcommand)]
    enum Command {
        /// Show every item and whether it is unlocked
        List,
        /// Unlock a random locked item
        Roll,
        /// Flip one item between locked and unlocked
        Toggle {
            /// Item key, e.g. `spirit-box`
            key: String,
        },
        /// Lock everything except the video camera
        Reset,
    }

    impl Cli {
        fn settings(&self) -> anyhow::Result<Settings> {
            let mut settings = match &self.config {
                Some(path) => {
                    let content = std::fs::read_to_string(path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    serde_json::from_str(&content)
                        .with_context(|| format!("parsing {}", path.display()))?
                }
                None => Settings::default(),
            };
            if let Some(dir) = &self.data_dir {
                settings.data_dir = dir.clone();
            }
            if let Some(seed) = self.seed {
                settings.seed = Some(seed);
            }
            if let Some(key) = &self.storage_key {
                settings.storage_key = key.clone();
            }
            Ok(settings)
        }
    }

    fn warn_unsaved<T>(result: &Persisted<T>) {
        if let Some(e) = &result.write_error {
            eprintln!("warning: progress not saved: {e}");
        }
    }

    fn print_items(roller: &Roller<FileStore>) {
        for item in roller.items() {
            let mark = if item.unlocked { "✅" } else { "🔒" };
            println!("{mark} {} {:<16} {}", item.icon, item.name, item.key);
        }
        println!("{}/{} unlocked", roller.unlocked_count(), roller.len());
    }

    pub fn run() -> anyhow::Result<()> {
        let cli = Cli::parse();
        let settings = cli.settings()?;
        log::debug!("Settings: {:?}", settings);

        let mut roller = phasmo_roller::open(FileStore::new(&settings.data_dir), &settings);
        log::info!(
            "Progress file: {}",
            roller.store().path_for(roller.storage_key()).display()
        );

        match cli.command.unwrap_or(Command::List) {
            Command::List => print_items(&roller),
            Command::Roll => {
                let result = roller.roll();
                warn_unsaved(&result);
                match result.value {
                    RollOutcome::Unlocked(key) => {
                        let item =
                            catalog::find(key).context("rolled item missing from catalog")?;
                        println!("🎉 New Item Unlocked! {} {}", item.icon, item.name);
                    }
                    RollOutcome::AllUnlocked => {
                        println!("🎉 All items unlocked! You've unlocked everything!");
                    }
                }
            }
            Command::Toggle { key } => {
                let result = roller.toggle(&key)?;
                warn_unsaved(&result);
                let state = if result.value { "unlocked" } else { "locked" };
                println!("{key} is now {state}");
            }
            Command::Reset => {
                let result = roller.reset();
                warn_unsaved(&result);
                println!(
                    "Progress reset ({}/{} unlocked)",
                    roller.unlocked_count(),
                    roller.len()
                );
            }
        }

        if roller.is_dirty() {
            log::warn!("Exiting with unsaved progress");
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is phasmo_roller::web::start, this is just to satisfy the compiler
}
