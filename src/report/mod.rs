//! msinfo32 report parsing
//!
//! Turns the text of one report into a [`HardwareRecord`]. Field lines are
//! recognized by locale-specific prefixes; a document with no recognizable
//! sections parses to an all-blank record rather than an error, since the
//! summaries tolerate blank fields.

pub mod filter;
pub mod section;

use crate::data::HardwareRecord;
use crate::utils::parsing::{normalize_tabs, strip_any_prefix};
use lazy_static::lazy_static;
use regex::Regex;
use section::{segment, Section, SectionKind};

lazy_static! {
    /// Disk sizes as msinfo32 prints them, e.g. "465,76 GB" or "111.79 GB".
    static ref DISK_SIZE_RE: Regex = Regex::new(r"\d+[,.]\d{2}\s\w{2}").unwrap();
}

const SYSTEM_NAME_PREFIXES: [&str; 2] = ["System Name ", "Имя системы "];
const PROCESSOR_PREFIXES: [&str; 2] = ["Processor ", "Процессор "];
const BOARD_MANUFACTURER_PREFIXES: [&str; 2] =
    ["BaseBoard Manufacturer ", "Изготовитель основной платы "];
const BOARD_PRODUCT_PREFIXES: [&str; 2] = ["BaseBoard Product ", "Модель основной платы "];
const MEMORY_PREFIXES: [&str; 2] = ["Total Physical Memory ", "Полный объем физической памяти "];
const DISPLAY_NAME_PREFIXES: [&str; 2] = ["Name ", "Имя "];

/// Parse one report document into a [`HardwareRecord`].
pub fn parse(document: &str) -> HardwareRecord {
    let mut record = HardwareRecord::default();
    // The first "[Диски]" section of a Russian report lists logical volumes,
    // not physical drives, and must be skipped wholesale.
    let mut localized_disks_seen = false;

    for section in segment(document) {
        match section.kind {
            SectionKind::SystemSummary => extract_system_summary(&section, &mut record),
            SectionKind::Display => extract_display(&section, &mut record),
            SectionKind::Disks => extract_disks(&section, &mut record),
            SectionKind::DisksLocalized => {
                if localized_disks_seen {
                    extract_localized_disks(&section, &mut record);
                } else {
                    localized_disks_seen = true;
                }
            }
            SectionKind::Other => {}
        }
    }

    record
}

fn extract_system_summary(section: &Section, record: &mut HardwareRecord) {
    for line in section.lines() {
        let line = normalize_tabs(line);
        if let Some(value) = strip_any_prefix(&line, &SYSTEM_NAME_PREFIXES) {
            record.system_name = value.to_string();
        } else if let Some(value) = strip_any_prefix(&line, &PROCESSOR_PREFIXES) {
            // Clock-speed suffix ("@ 2.50GHz") is noise for the summary.
            record.processor = value.split('@').next().unwrap_or(value).trim().to_string();
        } else if let Some(value) = strip_any_prefix(&line, &BOARD_MANUFACTURER_PREFIXES) {
            record.baseboard.push_str(value);
        } else if let Some(value) = strip_any_prefix(&line, &BOARD_PRODUCT_PREFIXES) {
            record.baseboard.push_str(value);
        } else if let Some(value) = strip_any_prefix(&line, &MEMORY_PREFIXES) {
            record.memory = value.to_string();
        }
    }
}

fn extract_display(section: &Section, record: &mut HardwareRecord) {
    for line in section.lines() {
        let line = normalize_tabs(line);
        if let Some(value) = strip_any_prefix(&line, &DISPLAY_NAME_PREFIXES) {
            record.video_cards.push(value.to_string());
        }
    }
}

fn extract_disks(section: &Section, record: &mut HardwareRecord) {
    for line in section.lines() {
        let line = normalize_tabs(line);
        if let Some(value) = line.strip_prefix("Model ") {
            record.disk_models.push(value.trim().to_string());
        } else if line.starts_with("Size ") {
            push_sizes(&line, &mut record.disk_sizes);
        }
    }
}

fn extract_localized_disks(section: &Section, record: &mut HardwareRecord) {
    for line in section.lines() {
        let line = normalize_tabs(line);
        if let Some(value) = line.strip_prefix("Модель ") {
            record.disk_models.push(value.trim().to_string());
        } else if let Some(payload) = line.strip_prefix("Размер ") {
            // Header and separator rows share the "Размер" prefix; only rows
            // whose payload leads with a digit carry a size value.
            if payload.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                push_sizes(payload, &mut record.disk_sizes);
            }
        }
    }
}

fn push_sizes(text: &str, sizes: &mut Vec<String>) {
    for m in DISK_SIZE_RE.find_iter(text) {
        sizes.push(m.as_str().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processor_clock_suffix_is_dropped_in_both_locales() {
        let english = "[System Summary]\nProcessor Intel(R) Core(TM) i5 @ 2.50GHz\n";
        assert_eq!(parse(english).processor, "Intel(R) Core(TM) i5");

        let russian = "[Сведения о системе]\nПроцессор Intel(R) Core(TM) i5 @ 2.50GHz\n";
        assert_eq!(parse(russian).processor, "Intel(R) Core(TM) i5");
    }

    #[test]
    fn baseboard_concatenates_manufacturer_then_product() {
        let doc = "[System Summary]\n\
                   BaseBoard Manufacturer Dell Inc.\n\
                   BaseBoard Product OptiPlex 7070\n";
        assert_eq!(parse(doc).baseboard, "Dell Inc.OptiPlex 7070");
    }

    #[test]
    fn garbage_input_yields_blank_record() {
        let record = parse("not a report at all\njust noise\n");
        assert_eq!(record, HardwareRecord::default());
        assert!(record.field_values().iter().all(|v| v.is_empty()));
    }

    #[test]
    fn tab_separated_lines_still_match() {
        let doc = "[System Summary]\nSystem Name\tPC42\n";
        assert_eq!(parse(doc).system_name, "PC42");
    }

    #[test]
    fn display_names_accumulate() {
        let doc = "[Display]\nName GeForce GTX 1060\nName Intel(R) UHD Graphics 630\n";
        assert_eq!(
            parse(doc).video_cards,
            vec!["GeForce GTX 1060", "Intel(R) UHD Graphics 630"]
        );
    }

    #[test]
    fn first_localized_disks_section_is_skipped() {
        let doc = "[Диски]\n\
                   Модель Логический диск C:\n\
                   Размер 99,99 ГБ\n\
                   [Диски]\n\
                   Модель Samsung SSD 860 EVO\n\
                   Размер 465,76 ГБ\n";
        let record = parse(doc);
        assert_eq!(record.disk_models, vec!["Samsung SSD 860 EVO"]);
        assert_eq!(record.disk_sizes, vec!["465,76 ГБ"]);
    }

    #[test]
    fn localized_size_lines_without_digit_payload_are_ignored() {
        let doc = "[Диски]\n\
                   [Диски]\n\
                   Размер Описание размера\n\
                   Размер 931,51 ГБ (1 000 202 273 280 байт)\n";
        assert_eq!(parse(doc).disk_sizes, vec!["931,51 ГБ"]);
    }

    #[test]
    fn english_disks_collect_all_models_and_sizes() {
        let doc = "[Disks]\n\
                   Model Samsung SSD 860 EVO\n\
                   Size 465,76 GB (500 107 862 016 bytes)\n\
                   Model WDC WD10EZEX\n\
                   Size 931.51 GB (1 000 202 273 280 bytes)\n";
        let record = parse(doc);
        assert_eq!(record.disk_models, vec!["Samsung SSD 860 EVO", "WDC WD10EZEX"]);
        assert_eq!(record.disk_sizes, vec!["465,76 GB", "931.51 GB"]);
    }

    #[test]
    fn end_to_end_minimal_document() {
        let doc = "[System Summary]\n\
                   System Name PC01\n\
                   Processor AMD Ryzen 5 @ 3.6GHz\n\
                   [Disks]\n\
                   Model Samsung SSD\n\
                   Size 465,76 GB\n";
        let record = parse(doc);
        assert_eq!(
            record,
            HardwareRecord {
                system_name: "PC01".to_string(),
                processor: "AMD Ryzen 5".to_string(),
                baseboard: String::new(),
                memory: String::new(),
                video_cards: vec![],
                disk_models: vec!["Samsung SSD".to_string()],
                disk_sizes: vec!["465,76 GB".to_string()],
            }
        );
    }

    #[test]
    fn crlf_report_lines_parse_cleanly() {
        let doc = "[System Summary]\r\nSystem Name PC01\r\nTotal Physical Memory 16,0 GB\r\n";
        let record = parse(doc);
        assert_eq!(record.system_name, "PC01");
        assert_eq!(record.memory, "16,0 GB");
    }
}
