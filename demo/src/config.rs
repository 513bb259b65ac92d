use serde::{Deserialize, Serialize};
use std::env::var_os;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// A custom character to upload before printing.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Glyph {
    /// CGRAM slot, printed as the character with this code.
    pub location: u8,
    /// One byte per pixel row, top to bottom.
    pub rows: Vec<u8>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Config {
    /// Text for each row of the display. `\u0000` to `\u0007` print the custom glyphs.
    pub text: Vec<String>,
    #[serde(default)]
    pub glyphs: Vec<Glyph>,
}

impl Config {
    fn path() -> PathBuf {
        var_os("HD44780_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("hd44780.json"))
    }

    /// Loads the config, or `None` if there's no config file.
    ///
    /// A config file that can't be read or parsed is an error, so it doesn't get replaced with
    /// the default one.
    pub fn try_load() -> eyre::Result<Option<Self>> {
        Self::load_from(&Self::path())
    }

    fn load_from(config_path: &Path) -> eyre::Result<Option<Self>> {
        if !config_path.exists() {
            return Ok(None);
        }
        let file = File::open(config_path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .map_err(|e| eyre::eyre!("Invalid config {}: {}", config_path.display(), e))?;
        Ok(Some(config))
    }

    pub fn save(&self) -> std::io::Result<()> {
        let file = File::create(Self::path())?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            text: vec![
                "\u{0} HD44780 \u{0}".to_string(),
                "4-bit GPIO".to_string(),
            ],
            glyphs: vec![Glyph {
                location: 0,
                // Heart
                rows: vec![0x00, 0x0A, 0x1F, 0x1F, 0x0E, 0x04, 0x00, 0x00],
            }],
        }
    }
}
