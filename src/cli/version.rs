use crate::cli::LICENSE_NOTICE;
use crate::display::{self, Styler};
use crate::error::Result;
use crate::registry;

/// Locally embedded version string
const LOCAL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print the local version, then check the npm registry for the latest one
pub fn run() -> Result<()> {
    let styler = Styler::new(display::should_use_colors());

    println!("{}\n", styler.yellow(LICENSE_NOTICE));
    println!(
        "{}",
        styler.green(&format!("Local installation is dtop@{}", LOCAL_VERSION))
    );
    println!(
        "{}",
        styler.cyan("Fetching package info from the npm registry, stand by for up to 5 seconds...")
    );

    match registry::fetch_latest(registry::PACKAGE_URL) {
        Ok(latest) => {
            println!(
                "{}",
                styler.magenta(&format!("dtop@latest is version {}", latest))
            );
            Ok(())
        }
        Err(_) => {
            // Fetch failure is user-visible on stdout, not an error dump.
            println!("Failed to fetch version info from the npm registry");
            std::process::exit(1);
        }
    }
}
