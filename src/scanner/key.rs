use crate::scanner::stats::MStats;

/// Tracks whether a simple key candidate is currently
/// pending, and the buffer position it was found at so the
/// scanner can later decide whether to promote it to a real
/// Token::Key
#[derive(Debug, Clone, Default)]
pub(in crate::scanner) struct Key
{
    saved: Option<SavedKey>,
}

impl Key
{
    pub fn new() -> Self
    {
        Self { saved: None }
    }

    /// Is a simple key candidate currently pending?
    pub fn possible(&self) -> bool
    {
        self.saved.is_some()
    }

    /// Save .stats as a simple key candidate, marking it
    /// .required if a value for it _must_ follow before the
    /// key expires
    pub fn save(&mut self, stats: MStats, required: bool)
    {
        let possible = match required
        {
            true => KeyPossible::Required,
            false => KeyPossible::Yes,
        };

        self.saved = Some(SavedKey { possible, stats });
    }

    /// The currently saved key candidate, if any
    pub fn saved(&mut self) -> &mut Option<SavedKey>
    {
        &mut self.saved
    }
}

/// A simple key candidate, and the buffer position it was
/// found at
#[derive(Debug, Clone)]
pub(in crate::scanner) struct SavedKey
{
    possible: KeyPossible,
    stats:    MStats,
}

impl SavedKey
{
    pub fn key(&self) -> KeyPossible
    {
        self.possible
    }

    pub fn key_mut(&mut self) -> &mut KeyPossible
    {
        &mut self.possible
    }

    pub fn stats(&self) -> MStats
    {
        self.stats.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(in crate::scanner) enum KeyPossible
{
    No,
    Yes,
    Required,
}

impl KeyPossible
{
    pub fn allowed(&self) -> bool
    {
        matches!(self, Self::Yes | Self::Required)
    }

    pub fn required(&self) -> bool
    {
        matches!(self, Self::Required)
    }
}

impl Default for KeyPossible
{
    fn default() -> Self
    {
        Self::No
    }
}
