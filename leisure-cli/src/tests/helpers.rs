//! Test helpers for writing catalog and feedback files.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Four usable activities and one record without coordinates.
pub(super) const CATALOG_JSON: &str = r#"[
    {
        "id": 1,
        "name": "Saentis ridge hike",
        "category": "hiking",
        "setting": "outdoor",
        "latitude": 47.2494,
        "longitude": 9.3433,
        "price": 5.0,
        "audiences": "hikers, nature lovers"
    },
    {
        "id": 2,
        "name": "Three ponds walk",
        "category": "hiking",
        "setting": "outdoor",
        "latitude": 47.4165,
        "longitude": 9.3843,
        "price": 8.0,
        "audiences": "hikers, family"
    },
    {
        "id": 3,
        "name": "Textile museum",
        "category": "culture",
        "setting": "indoor",
        "latitude": 47.4230,
        "longitude": 9.3745,
        "price": 40.0
    },
    {
        "id": 4,
        "name": "Climbing hall",
        "category": "sport",
        "setting": "indoor",
        "latitude": 47.4310,
        "longitude": 9.4012,
        "price": 25.0,
        "min_people": 2
    },
    { "id": 5, "name": "Unplaced pop-up" }
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory holding a catalog and a feedback file.
pub(super) struct Workspace {
    _tmp: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) catalog: Utf8PathBuf,
    pub(super) feedback: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let catalog = root.join("catalog.json");
        let feedback = root.join("feedback.json");
        Self {
            _tmp: tmp,
            root,
            catalog,
            feedback,
        }
    }

    /// Write the standard catalog and the given feedback lists.
    pub(super) fn with_feedback(liked: &[u64], disliked: &[u64]) -> Self {
        let workspace = Self::new();
        write_utf8(&workspace.catalog, CATALOG_JSON.as_bytes());
        workspace.write_feedback(liked, disliked);
        workspace
    }

    pub(super) fn write_feedback(&self, liked: &[u64], disliked: &[u64]) {
        let payload = serde_json::json!({ "liked": liked, "disliked": disliked });
        write_utf8(&self.feedback, payload.to_string().as_bytes());
    }
}
