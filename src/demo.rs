//! Built-in demo dataset used when no remote sheet is configured.

use crate::record::{ImageRecord, Snapshot};

pub struct DemoImage {
    pub id: &'static str,
    pub url: &'static str,
    pub label: &'static str,
}

pub const DEMO_IMAGES: &[DemoImage] = &[
    DemoImage {
        id: "demo-1",
        url: "https://picsum.photos/id/1015/800/600",
        label: "Mountain Lake",
    },
    DemoImage {
        id: "demo-2",
        url: "https://picsum.photos/id/1016/800/600",
        label: "Desert Canyon",
    },
    DemoImage {
        id: "demo-3",
        url: "https://picsum.photos/id/1018/800/600",
        label: "Forest Trail",
    },
    DemoImage {
        id: "demo-4",
        url: "https://picsum.photos/id/1019/800/600",
        label: "Ocean Cliffs",
    },
    DemoImage {
        id: "demo-5",
        url: "https://picsum.photos/id/1021/800/600",
        label: "Misty Valley",
    },
    DemoImage {
        id: "demo-6",
        url: "https://picsum.photos/id/1022/800/600",
        label: "Rolling Hills",
    },
];

/// Materializes the fixture as a fresh snapshot.
pub fn demo_snapshot() -> Snapshot {
    DEMO_IMAGES
        .iter()
        .map(|d| ImageRecord::new(d.id, d.url, d.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn six_records_with_unique_ids() {
        let snapshot = demo_snapshot();
        assert_eq!(snapshot.len(), 6);
        let ids: HashSet<_> = snapshot.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
        assert!(snapshot.iter().all(|r| r.url.starts_with("http")));
    }
}
