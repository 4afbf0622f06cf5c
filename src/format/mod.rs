//! Document formats understood by the loader and the serializer.

pub mod ini;
pub mod json;

/// On-disk representation of a parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Ini,
}

impl Format {
    /// File extension written by [`crate::Config::save_params`]
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Ini => "ini",
        }
    }

    /// INI documents carry every leaf value as a string
    pub fn values_as_strings(self) -> bool {
        matches!(self, Format::Ini)
    }
}
