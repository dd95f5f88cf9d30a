use notemark_config::EditorConfig;

/// Per-document editing state. Each session owns its own copy; nothing
/// about it is global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentMode {
    /// Bullet lines promote to task items, and list continuation creates
    /// task items.
    pub checkbox_mode: bool,
    pub inline_promotion: bool,
    pub block_promotion: bool,
}

impl Default for DocumentMode {
    fn default() -> Self {
        Self::from(&EditorConfig::default())
    }
}

impl From<&EditorConfig> for DocumentMode {
    fn from(config: &EditorConfig) -> Self {
        Self {
            checkbox_mode: config.checkbox_mode,
            inline_promotion: config.inline_promotion,
            block_promotion: config.block_promotion,
        }
    }
}
