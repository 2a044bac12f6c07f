//! Version command - Print the glee version

use crate::errors::Result;

/// Version string baked in at build time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("glee version {}", VERSION)
}

/// Print the version number of glee
pub async fn run() -> Result<()> {
    println!("{}", version_line());
    Ok(())
}
