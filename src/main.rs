use anyhow::Result;
use resume_data::app_log;
use resume_data::logging::init_tracing;

fn main() -> Result<()> {
    init_tracing();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    resume_data::run(&mut out)?;

    app_log!(debug, "Done");
    Ok(())
}
