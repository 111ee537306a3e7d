use std::env;
use std::io;
use std::path::PathBuf;

use log::{info, warn};

use crate::artwork::{LoftyInspector, UreqClient};
use crate::pipeline::scan_and_fetch;

mod logging;
mod prompt;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_warning) = settings::load_settings();

    if let Some(msg) = logging::init(&settings.log.level) {
        warn!("{msg}");
    }
    if let Some(msg) = config_warning {
        warn!("{msg}");
    }

    let root = match env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => prompt::read_root(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let inspector = LoftyInspector;
    let http = UreqClient::new(&settings.http);

    let summary = scan_and_fetch(&root, &settings, &inspector, &http)?;
    info!("Done. {summary}");
    for failure in &summary.failures {
        warn!(
            "No cover for {} ({} failed): {}",
            failure.path.display(),
            failure.stage,
            failure.reason
        );
    }

    Ok(())
}
