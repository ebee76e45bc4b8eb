use std::io::Write;

use anyhow::Result;
use doccheck_core::DocCheckConfig;

/// Print `config` as TOML.
pub fn run(config: &DocCheckConfig, out: &mut dyn Write) -> Result<()> {
    let rendered = config.to_toml()?;
    write!(out, "{rendered}")?;
    Ok(())
}
