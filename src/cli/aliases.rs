//! Print the directory alias table.

use anyhow::Result;

use voxfile::config::AliasTable;

pub fn aliases_command() -> Result<()> {
    let table = AliasTable::from_env()?;

    for alias in table.iter() {
        let marker = if alias.path.exists() {
            ""
        } else {
            "  (missing)"
        };
        println!("{:<10} {}{}", alias.name, alias.path.display(), marker);
    }

    Ok(())
}
