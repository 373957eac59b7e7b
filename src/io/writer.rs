//! Gold data writing.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use log::info;

use crate::error::Error;
use crate::formatting::GoldFormat;

/// Writes gold records under a destination directory.
///
/// The file is named `cooked_orchid_<YYYYmmdd_HHMM>.<sl|wl>`; nothing is
/// created unless [GoldWriter::write] runs.
pub struct GoldWriter {
    dst: PathBuf,
    format: GoldFormat,
}

impl GoldWriter {
    pub fn new(dst: &Path, format: GoldFormat) -> Self {
        Self {
            dst: dst.to_path_buf(),
            format,
        }
    }

    /// Writes one record per line and returns the created path.
    ///
    /// WL records carry their own terminating newline, so their blocks end
    /// up separated by a blank line.
    pub fn write(&self, records: &[String]) -> Result<PathBuf, Error> {
        let timestamp = Local::now().format("%Y%m%d_%H%M");
        let filename = format!("cooked_orchid_{}.{}", timestamp, self.format);
        let path = self.dst.join(filename);

        info!("creating {:?}", path);
        let mut out = BufWriter::new(File::create(&path)?);
        for record in records {
            writeln!(out, "{}", record)?;
        }
        out.flush()?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sl_records_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let wr = GoldWriter::new(dir.path(), GoldFormat::Sl);
        let path = wr
            .write(&["คำ พูด".to_string(), "กิน .".to_string()])
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!("คำ พูด\nกิน .\n", content);
    }

    #[test]
    fn wl_blocks_get_a_blank_line() {
        let dir = tempfile::tempdir().unwrap();
        let wr = GoldWriter::new(dir.path(), GoldFormat::Wl);
        let path = wr
            .write(&["คำ\nพูด\n".to_string(), "กิน\n.\n".to_string()])
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!("คำ\nพูด\n\nกิน\n.\n\n", content);
    }

    #[test]
    fn filename_carries_format_tag() {
        let dir = tempfile::tempdir().unwrap();
        let wr = GoldWriter::new(dir.path(), GoldFormat::Wl);
        let path = wr.write(&[]).unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("cooked_orchid_"));
        assert!(name.ends_with(".wl"));
    }

    #[test]
    fn unwritable_destination_is_fatal() {
        let wr = GoldWriter::new(Path::new("no_such_dir_anywhere"), GoldFormat::Sl);
        assert!(matches!(wr.write(&[]), Err(Error::Io(_))));
    }
}
