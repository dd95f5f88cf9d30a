#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// An opening fence line: its kind and optional info string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    pub kind: FenceKind,
    pub info: Option<String>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    pub fn kind(line: &str) -> Option<FenceKind> {
        let t = line.trim_start();
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceKind::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceKind::Tildes)
        } else {
            None
        }
    }

    /// Recognises an opening fence, capturing the info string after it.
    pub fn open(line: &str) -> Option<FenceOpen> {
        let kind = Self::kind(line)?;
        let marker = match kind {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        };
        let info = line.trim_start().trim_start_matches(marker).trim();
        Some(FenceOpen {
            kind,
            info: (!info.is_empty()).then(|| info.to_string()),
        })
    }

    pub fn closes(kind: FenceKind, line: &str) -> bool {
        Self::kind(line) == Some(kind)
    }
}
