use crate::cli::LICENSE_NOTICE;
use crate::display::{self, Styler};
use crate::error::Result;
use crate::prompt::{self, PromptTheme};
use crate::renderer;

const INTERACTIVE_NOTICE: &str = "Press Ctrl+C to exit. For help, exit and run 'dtop -h'.\n\
Run 'dtop -v' to check for updates.";

/// Run the interactive default flow: prompts, assembly, print to stdout
pub fn run() -> Result<()> {
    let use_colors = display::should_use_colors();
    let styler = Styler::new(use_colors);

    println!("{}\n", styler.yellow(LICENSE_NOTICE));
    println!("{}\n", styler.cyan(INTERACTIVE_NOTICE));

    let theme = PromptTheme::new(use_colors);
    let draft = prompt::collect_draft(&theme)?;

    // Printed to stdout only; saving the entry to a file is up to the user.
    let entry = renderer::render(&draft);
    println!("\n{}", styler.green(&entry));

    Ok(())
}
