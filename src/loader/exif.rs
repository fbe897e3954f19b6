use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// EXIFから撮影日時を取り出す
pub fn extract_date(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let mut bufreader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut bufreader)?;

    [exif::Tag::DateTimeOriginal, exif::Tag::DateTime]
        .into_iter()
        .find_map(|tag| exif.get_field(tag, exif::In::PRIMARY))
        .map(|field| field.display_value().to_string())
        .ok_or_else(|| "No date found in EXIF".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_date_missing_file() {
        assert!(extract_date(Path::new("/nonexistent/image-compare/a.jpg")).is_err());
    }

    #[test]
    fn test_extract_date_without_exif() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.jpg");
        std::fs::write(&path, b"not a jpeg").unwrap();
        assert!(extract_date(&path).is_err());
    }
}
