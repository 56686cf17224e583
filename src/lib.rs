#[macro_use]
pub mod logging;
pub mod confirmation;
pub mod placeholder;
pub mod types;

pub use confirmation::{emit_confirmation, CONFIRMATION_LINES};
pub use types::Resume;

use anyhow::{Context, Result};
use std::io::Write;

/// Build the placeholder resume and confirm it on `out`.
pub fn run<W: Write>(out: &mut W) -> Result<Resume> {
    let resume = Resume::placeholder();

    app_log!(
        info,
        "Resume built: {} education, {} projects, {} certifications, {} achievements",
        resume.education.len(),
        resume.projects.len(),
        resume.certifications.len(),
        resume.achievements.len()
    );
    if tracing::enabled!(tracing::Level::DEBUG) {
        let json = serde_json::to_string(&resume).context("Failed to serialize resume")?;
        app_log!(debug, "Resume record: {}", json);
    }

    emit_confirmation(out)?;
    Ok(resume)
}
