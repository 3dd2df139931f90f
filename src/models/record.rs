/// One naming-table record as handed over by the font container.
///
/// IDs are the raw integers stored in the font; the string payload has
/// already been decoded by the container adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNameRecord {
    /// Raw platform ID
    pub platform_id: u16,
    /// Raw language ID, interpreted relative to the platform
    pub language_id: u16,
    /// Raw name ID
    pub name_id: u16,
    /// Decoded string payload
    pub value: String,
}

impl RawNameRecord {
    pub fn new(platform_id: u16, language_id: u16, name_id: u16, value: impl Into<String>) -> Self {
        RawNameRecord {
            platform_id,
            language_id,
            name_id,
            value: value.into(),
        }
    }
}
