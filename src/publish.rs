//! Boundary with the upload and notification backends.
//!
//! The catalog never looks inside a backend. A notifier only reports whether
//! delivery worked; an uploader only hands back an opaque video id. What the
//! catalog records is the outcome, written to the item's document through
//! [`Catalog::update`].

use std::path::Path;

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::models::{Channel, Item};

/// Delivers an announcement about an item over one channel.
pub trait Notifier {
    fn channel(&self) -> Channel;

    fn notify(&self, item: &Item) -> anyhow::Result<()>;
}

/// Uploads a rendered video and returns the hosting backend's identifier.
pub trait Uploader {
    fn upload(&self, video: &Path, item: &Item) -> anyhow::Result<String>;
}

/// Announce `item` through `notifier` and record the channel's posted flag.
///
/// Returns `Ok(false)` when delivery failed; the document is then left
/// unchanged. Errors are only returned for failures to persist the flag.
pub fn announce(catalog: &Catalog, item: &mut Item, notifier: &dyn Notifier) -> Result<bool> {
    let channel = notifier.channel();

    if let Err(e) = notifier.notify(item) {
        warn!(item = %item.name, %channel, error = %e, "announcement failed");
        return Ok(false);
    }

    item.posted.set(channel, true);
    catalog.update(item)?;
    info!(item = %item.name, %channel, "announcement posted");
    Ok(true)
}

/// Upload the item's video file and store the returned identifier.
pub fn upload(catalog: &Catalog, item: &mut Item, uploader: &dyn Uploader) -> Result<String> {
    let video = item
        .video_file
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .ok_or_else(|| CatalogError::invalid("upload", "item has no video file"))?
        .to_string();

    let id = uploader
        .upload(Path::new(&video), item)
        .map_err(|e| CatalogError::Backend {
            op: "upload",
            reason: format!("{e:#}"),
        })?;

    if id.trim().is_empty() {
        return Err(CatalogError::Backend {
            op: "upload",
            reason: "backend returned an empty video id".to_string(),
        });
    }

    item.video_id = Some(id.clone());
    catalog.update(item)?;
    info!(item = %item.name, video_id = %id, "upload recorded");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::Workspace;
    use std::cell::RefCell;
    use tempfile::TempDir;

    struct FakeNotifier {
        channel: Channel,
        fail: bool,
        seen: RefCell<Vec<String>>,
    }

    impl Notifier for FakeNotifier {
        fn channel(&self) -> Channel {
            self.channel
        }

        fn notify(&self, item: &Item) -> anyhow::Result<()> {
            self.seen.borrow_mut().push(item.name.clone());
            if self.fail {
                anyhow::bail!("channel unavailable");
            }
            Ok(())
        }
    }

    struct FakeUploader(&'static str);

    impl Uploader for FakeUploader {
        fn upload(&self, _video: &Path, _item: &Item) -> anyhow::Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct BrokenUploader;

    impl Uploader for BrokenUploader {
        fn upload(&self, _video: &Path, _item: &Item) -> anyhow::Result<String> {
            anyhow::bail!("quota exceeded")
        }
    }

    fn setup() -> (TempDir, Catalog, Item) {
        let temp_dir = TempDir::new().unwrap();
        let catalog = Catalog::new(Workspace::default_in(temp_dir.path()));
        catalog.create("Launch", "news").unwrap();
        let item = catalog.get("Launch", "news").unwrap();
        (temp_dir, catalog, item)
    }

    #[test]
    fn test_announce_records_posted_flag() {
        let (_temp, catalog, mut item) = setup();
        let notifier = FakeNotifier {
            channel: Channel::Slack,
            fail: false,
            seen: RefCell::new(Vec::new()),
        };

        assert!(announce(&catalog, &mut item, &notifier).unwrap());
        assert_eq!(*notifier.seen.borrow(), vec!["Launch".to_string()]);

        let stored = catalog.get("Launch", "news").unwrap();
        assert!(stored.posted.slack);
        assert!(!stored.posted.email);
    }

    #[test]
    fn test_failed_announce_leaves_document() {
        let (_temp, catalog, mut item) = setup();
        let notifier = FakeNotifier {
            channel: Channel::Email,
            fail: true,
            seen: RefCell::new(Vec::new()),
        };

        assert!(!announce(&catalog, &mut item, &notifier).unwrap());
        assert!(!catalog.get("Launch", "news").unwrap().posted.email);
    }

    #[test]
    fn test_upload_stores_id() {
        let (_temp, catalog, mut item) = setup();
        item.video_file = Some("/renders/launch.mp4".to_string());

        let id = upload(&catalog, &mut item, &FakeUploader("abc123")).unwrap();
        assert_eq!(id, "abc123");
        assert_eq!(
            catalog.get("Launch", "news").unwrap().video_id.as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn test_upload_requires_video_file() {
        let (_temp, catalog, mut item) = setup();
        let err = upload(&catalog, &mut item, &FakeUploader("abc")).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument { op: "upload", .. }));
    }

    #[test]
    fn test_upload_rejects_empty_id() {
        let (_temp, catalog, mut item) = setup();
        item.video_file = Some("/renders/launch.mp4".to_string());

        let err = upload(&catalog, &mut item, &FakeUploader("  ")).unwrap_err();
        assert!(matches!(err, CatalogError::Backend { .. }));
        assert!(catalog.get("Launch", "news").unwrap().video_id.is_none());
    }

    #[test]
    fn test_upload_backend_failure() {
        let (_temp, catalog, mut item) = setup();
        item.video_file = Some("/renders/launch.mp4".to_string());

        let err = upload(&catalog, &mut item, &BrokenUploader).unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }
}
