//! libchinese-punct
//!
//! Punctuation editor for Chinese input methods: after the trigger key, ASCII
//! punctuation, digits and letters are replaced by full-width and localized
//! variants picked from a paged candidate list.
//!
//! Public API:
//! - `PunctuationEditor` - Mode state machine driving the whole session
//! - `Editor` - Key/candidate/reset interface shared with other editors
//! - `PunctTable` - Read-only variant table (standard or custom)
//! - `CandidateList` - Paged, cursor-addressable candidate list
//! - `RenderAdapter` / `ImeContext` - Output sink and its recording default
//! - `Config` - Page size, orientation, trigger and colours
use anyhow::Context as _;
use serde::{Deserialize, Serialize};

pub mod candidate;
pub use candidate::{CandidateList, Orientation};

pub mod context;
pub use context::{ImeContext, RenderAdapter};

pub mod editor;
pub use editor::{Editor, PunctMode, PunctuationEditor};

pub mod input_buffer;
pub use input_buffer::{InputBuffer, PunctChar};

pub mod key_event;
pub use key_event::{KeyEvent, KeyResult, Modifiers};

pub mod punct_table;
pub use punct_table::PunctTable;

pub mod text;
pub use text::{Attribute, AttributeKind, StyledText, Underline};

/// Editor configuration.
///
/// Missing fields take their defaults, so a partial TOML file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Candidates per page (values below 1 are treated as 1)
    pub page_size: usize,

    /// Candidate window layout
    pub orientation: Orientation,

    /// Key that opens punctuation mode
    pub trigger: char,

    /// Foreground colour of candidate entries (0xRRGGBB)
    pub candidate_color: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 5,
            orientation: Orientation::System,
            trigger: '`',
            candidate_color: 0x004466,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The trigger has to be a key the host can deliver as a character.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.trigger.is_ascii_graphic(),
            "trigger {:?} is not a printable ASCII character",
            self.trigger
        );
        anyhow::ensure!(
            self.candidate_color <= 0xffffff,
            "candidate colour {:#x} is not an RGB value",
            self.candidate_color
        );
        Ok(())
    }
}
