use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;

const DEFAULT_SCENARIO: &str = r#"# Medipyxis ROI scenario

[practice]
providers = 5
clinics = 1
solo = false

[financials]
annual_revenue_per_provider = 750000
denial_rate_percent = 21
daily_doc_hours = 2.5

[pricing]
price_per_provider = 500

# Monthly cost per user of each tool in use today
[legacy_tools]
ehr = 300
scheduling = 50
crm = 150
billing = 200
hr = 75
lms = 50
inventory = 100
analytics = 75
"#;

pub fn init_config(force: bool) -> Result<()> {
    let path = write_default_scenario(Path::new("."), force)?;
    println!("Created {} scenario file", path.display());
    Ok(())
}

/// Write the default scenario into `dir`, refusing to clobber without `force`.
pub fn write_default_scenario(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);

    if path.exists() && !force {
        anyhow::bail!("Scenario file already exists. Use --force to overwrite.");
    }

    std::fs::write(&path, DEFAULT_SCENARIO)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
