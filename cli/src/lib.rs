//! Roster loading shared by the `arena-cli` and `matchups` binaries.

use anyhow::{Context, Result};
use arena::{content, Roster};
use encoding_rs::Encoding;
use std::{fs, path::Path};

/// Reads a text file, honoring a UTF-8/UTF-16 BOM if present.
pub fn read_text_auto(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read roster: {}", path.display()))?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        Ok(String::from_utf8(bytes)?)
    }
}

/// Loads the roster at `path`, or the built-in classic roster when absent.
pub fn load_roster(path: Option<&Path>) -> Result<Roster> {
    match path {
        Some(p) => {
            let text = read_text_auto(p)?;
            Roster::from_yaml(&text).with_context(|| format!("invalid roster: {}", p.display()))
        }
        None => Ok(content::classic_roster()?),
    }
}
