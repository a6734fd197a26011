use std::path::{Path, PathBuf};

use splitcat::error::Result;
use splitcat::session::Session;
use splitcat::settings::{load_settings, Settings};

use super::{open_session, SourceArgs};

pub(crate) fn write_export(session: &Session, output: Option<&Path>, settings: &Settings) -> Result<PathBuf> {
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&settings.export_file_name));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, session.export_csv()?)?;
    println!("Wrote {} ({} transactions)", path.display(), session.ledger().len());
    Ok(path)
}

pub fn run(source: &SourceArgs, output: Option<&Path>) -> Result<()> {
    let settings = load_settings();
    let session = open_session(source, &settings)?;
    write_export(&session, output, &settings)?;
    Ok(())
}
