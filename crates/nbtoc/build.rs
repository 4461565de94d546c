use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    built::write_built_file()?;

    let build_time = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let out_dir = std::env::var("OUT_DIR")?;

    // Included as a string literal by `main.rs`.
    std::fs::write(
        Path::new(&out_dir).join("build_time.txt"),
        format!("{build_time:?}"),
    )?;

    Ok(())
}
