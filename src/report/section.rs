//! Report segmentation and section classification
//!
//! msinfo32 reports are a sequence of bracket-headed sections. Section
//! boundaries are detected purely by the `[` that opens each header; the
//! chunk before the first header is file preamble and gets dropped.

/// Logical section kinds the parser cares about. Reports come in two
/// locales, so each kind maps to one header per locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    SystemSummary,
    Display,
    /// `[Disks]` in English reports.
    Disks,
    /// `[Диски]` in Russian reports. The Russian locale renders both the
    /// physical-drives and the logical-disks sections under this one label,
    /// so occurrences of this kind need to be told apart by the caller.
    DisksLocalized,
    Other,
}

/// One bracket-headed chunk of a report.
#[derive(Debug)]
pub struct Section {
    pub kind: SectionKind,
    text: String,
}

impl Section {
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }
}

const SYSTEM_SUMMARY_HEADERS: [&str; 2] = ["[System Summary]", "[Сведения о системе]"];
const DISPLAY_HEADERS: [&str; 2] = ["[Display]", "[Дисплей]"];
const DISKS_HEADER: &str = "[Disks]";
const DISKS_LOCALIZED_HEADER: &str = "[Диски]";

fn classify(text: &str) -> SectionKind {
    if SYSTEM_SUMMARY_HEADERS.iter().any(|h| text.starts_with(h)) {
        SectionKind::SystemSummary
    } else if DISPLAY_HEADERS.iter().any(|h| text.starts_with(h)) {
        SectionKind::Display
    } else if text.starts_with(DISKS_HEADER) {
        SectionKind::Disks
    } else if text.starts_with(DISKS_LOCALIZED_HEADER) {
        SectionKind::DisksLocalized
    } else {
        SectionKind::Other
    }
}

/// Split a full report into classified sections, dropping the preamble
/// before the first `[`.
pub fn segment(document: &str) -> Vec<Section> {
    document
        .split('[')
        .skip(1)
        .map(|chunk| {
            let text = format!("[{}", chunk);
            Section {
                kind: classify(&text),
                text,
            }
        })
        .collect()
}
