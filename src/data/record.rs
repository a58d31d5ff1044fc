//! Normalized per-machine hardware fields

/// Field names in output order, used as the CSV header and as the keys of
/// the text summary.
pub const FIELD_NAMES: [&str; 7] = [
    "System Name",
    "Processor",
    "Motherboard",
    "RAM",
    "Video Card",
    "Disk Model",
    "Disk Size",
];

/// One machine's extracted hardware info.
///
/// Every record carries all seven fields so that summary columns stay
/// aligned across machines: scalars default to an empty string, the
/// multi-valued fields to an empty list. A machine may have several video
/// cards and disks; those lists preserve report order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardwareRecord {
    pub system_name: String,
    pub processor: String,
    pub baseboard: String,
    pub memory: String,
    pub video_cards: Vec<String>,
    pub disk_models: Vec<String>,
    pub disk_sizes: Vec<String>,
}

impl HardwareRecord {
    /// Field values in [`FIELD_NAMES`] order, list fields flattened with
    /// `", "` — the shape both summary artifacts write.
    pub fn field_values(&self) -> [String; 7] {
        [
            self.system_name.clone(),
            self.processor.clone(),
            self.baseboard.clone(),
            self.memory.clone(),
            self.video_cards.join(", "),
            self.disk_models.join(", "),
            self.disk_sizes.join(", "),
        ]
    }
}
