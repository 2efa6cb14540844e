//! Logo applicator entry point.
//!
//! Applies one of the numbered logo designs in the working directory to the
//! app's icon set and in-app logo, then makes it the default logo.
//!
//! # Usage
//!
//! ```text
//! logo-apply <DESIGN>
//!
//! Arguments:
//!   <DESIGN>  Design number to apply (1-7)
//! ```
//!
//! # Exit status
//!
//! | Situation                                        | Status |
//! |--------------------------------------------------|--------|
//! | missing or extra arguments, any flag             | 2      |
//! | argument is not a number / not a catalog key     | 1      |
//! | unreadable config, or backup rename I/O error    | 1      |
//! | everything else, including a failed apply        | 0      |
//!
//! A failed apply (missing design file, `sips` not launchable, design not
//! copied over the default logo) is reported on stdout only.  The tool has
//! no flags: `--help` and `--version` are usage errors like any other.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()            -- optional logo-apply.toml in the working dir
//!  └─ list_designs()           -- printed before arguments are validated
//!  └─ Cli::try_parse()         -- exactly one positional argument
//!  └─ DesignCatalog::resolve() -- number + range validation
//!  └─ ApplyDesignUseCase::apply()
//!       ├─ SipsResizer         (child process per size)
//!       └─ LocalAssetStore     (working directory)
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use logo_apply::application::apply_design::ApplyDesignUseCase;
use logo_apply::application::list_designs::list_designs;
use logo_apply::infrastructure::console;
use logo_apply::infrastructure::resizer::sips::SipsResizer;
use logo_apply::infrastructure::storage::config::load_config;
use logo_apply::infrastructure::storage::local::LocalAssetStore;
use logo_core::DesignCatalog;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Applies a logo design to the app icon set and in-app logo.
#[derive(Debug, Parser)]
#[command(name = "logo-apply", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    // Kept as text: non-numeric and out-of-range values are reported by the
    // catalog, not by clap.
    /// Design number to apply (1-7).
    #[arg(allow_negative_numbers = true)]
    design: String,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    let work_dir = std::env::current_dir().context("cannot determine working directory")?;
    let config = load_config(&work_dir).context("cannot load logo-apply.toml")?;

    // `RUST_LOG` wins over the configured level.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .init();

    info!(dir = %work_dir.display(), program = %config.resizer.program, "logo-apply starting");

    let catalog = DesignCatalog::standard();
    let store = Arc::new(LocalAssetStore::new(&work_dir));

    println!("{}\n", console::BANNER);
    println!("{}", console::render_listing(&list_designs(&catalog, &*store)));
    println!("\n{}", console::render_usage("logo-apply"));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.use_stderr() {
                println!("\n❓ Please choose a design number (1-7)");
            }
            // Prints the usage error and exits.
            e.exit();
        }
    };

    let design = match catalog.resolve(&cli.design) {
        Ok(design) => design,
        Err(e) => {
            println!("❌ {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("\n{}", console::render_selection(design));

    let use_case = ApplyDesignUseCase::new(
        Arc::new(SipsResizer::new(config.resizer.program.clone())),
        store,
        config.asset_dirs(),
    );
    let outcome = use_case
        .apply(design.number)
        .with_context(|| format!("applying design {} failed midway", design.number))?;

    println!("{}", console::render_outcome(&outcome));
    info!(success = outcome.is_success(), "logo-apply finished");

    Ok(ExitCode::SUCCESS)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
