use std::path::Path;

/// Entry names in an OLE compound file that indicate stored pictures.
const MEDIA_ENTRY_MARKERS: [&str; 3] = ["image", "Pictures", "PICTURE"];

/// Looks for picture storages or streams in a legacy compound document.
/// A file that is not a compound document reports no media.
pub fn has_embedded_media(path: &Path) -> bool {
    let compound = match cfb::open(path) {
        Ok(compound) => compound,
        Err(e) => {
            tracing::debug!(error = %e, path = %path.display(), "Not an OLE compound file");
            return false;
        }
    };

    compound.walk().any(|entry| {
        MEDIA_ENTRY_MARKERS
            .iter()
            .any(|marker| entry.name().contains(marker))
    })
}
