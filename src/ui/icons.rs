//! File-type icons for listing entries
//!
//! Icon and color keyed on the server-assigned extension tag. Unknown
//! extensions get the generic document icon.

use ratatui::style::Color;

use filetui::api::FileEntry;

/// Icon plus the color it is drawn in
pub fn icon_for(entry: &FileEntry) -> (&'static str, Color) {
    if entry.is_dir {
        return ("\u{1F4C1}", Color::Blue);
    }

    match entry.entry_type.trim_start_matches('.').to_lowercase().as_str() {
        "jpg" | "jpeg" | "png" | "gif" | "webp" | "svg" | "bmp" => ("\u{1F5BC}", Color::Magenta),
        "mp4" | "mkv" | "mov" | "avi" | "webm" => ("\u{1F3AC}", Color::Red),
        "mp3" | "wav" | "flac" | "ogg" | "m4a" => ("\u{1F3B5}", Color::Green),
        "pdf" => ("\u{1F4D5}", Color::Red),
        "doc" | "docx" | "txt" | "md" | "rtf" => ("\u{1F4C4}", Color::Cyan),
        "xls" | "xlsx" | "csv" => ("\u{1F4CA}", Color::Green),
        "zip" | "tar" | "gz" | "rar" | "7z" => ("\u{1F4E6}", Color::Yellow),
        "rs" | "go" | "py" | "js" | "ts" | "c" | "h" | "java" | "sh" => ("\u{1F4DD}", Color::Yellow),
        _ => ("\u{1F4C4}", Color::Gray),
    }
}

/// Whether the server can render a thumbnail for this entry
pub fn is_image(entry: &FileEntry) -> bool {
    matches!(
        entry.entry_type.trim_start_matches('.').to_lowercase().as_str(),
        "jpg" | "jpeg" | "png" | "gif" | "webp"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(entry_type: &str, is_dir: bool) -> FileEntry {
        FileEntry {
            name: "x".to_string(),
            size: 0,
            is_dir,
            mod_time: String::new(),
            entry_type: entry_type.to_string(),
        }
    }

    #[test]
    fn test_directories_get_folder_icon() {
        let (icon, _) = icon_for(&entry("", true));
        assert_eq!(icon, "\u{1F4C1}");
    }

    #[test]
    fn test_extension_tag_is_case_insensitive() {
        assert_eq!(icon_for(&entry(".JPG", false)), icon_for(&entry(".jpg", false)));
    }

    #[test]
    fn test_unknown_extension_gets_generic_icon() {
        let (icon, _) = icon_for(&entry(".xyz", false));
        assert_eq!(icon, "\u{1F4C4}");
    }

    #[test]
    fn test_is_image_matches_thumbnailable_types() {
        assert!(is_image(&entry(".png", false)));
        assert!(is_image(&entry(".webp", false)));
        assert!(!is_image(&entry(".pdf", false)));
        assert!(!is_image(&entry(".svg", false)));
    }
}
