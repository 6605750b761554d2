//! Upload collaborator integration: the surface brokers transfers without
//! ever letting a failed or in-flight upload corrupt the document.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use blockpress_engine::{
    BlockType, EditingSurface, ImageStore, UploadError, UploadSource,
};
use pretty_assertions::assert_eq;

/// Store that resolves after a short delay, like a real network transfer.
#[derive(Clone)]
struct SlowStore {
    delay: Duration,
}

impl ImageStore for SlowStore {
    async fn upload(&self, source: UploadSource) -> Result<String, UploadError> {
        tokio::time::sleep(self.delay).await;
        if source.bytes.is_empty() {
            return Err(UploadError::Transfer(format!(
                "{} is empty",
                source.file_name
            )));
        }
        Ok(format!("https://cdn.example/uploads/{}", source.file_name))
    }
}

fn surface_with_log(
    store: SlowStore,
) -> (EditingSurface<SlowStore>, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let surface = EditingSurface::new("", store, move |s: &str| {
        sink.borrow_mut().push(s.to_string());
    });
    (surface, log)
}

#[tokio::test]
async fn resolved_upload_lands_in_its_own_block_only() {
    let (mut surface, _log) = surface_with_log(SlowStore {
        delay: Duration::from_millis(5),
    });
    let (hero, _) = surface.add_block(BlockType::Image);
    let (inline, _) = surface.add_block(BlockType::Image);

    let transfer = surface
        .begin_upload(&hero, UploadSource::new("hero.jpg", vec![0xff]))
        .unwrap();
    let outcome = transfer.await;
    surface.finish_upload(outcome).unwrap();

    assert_eq!(
        surface.document().get(&hero).unwrap().kind.value(),
        "https://cdn.example/uploads/hero.jpg"
    );
    assert_eq!(surface.document().get(&inline).unwrap().kind.value(), "");
}

#[tokio::test]
async fn concurrent_transfers_resolve_independently() {
    let (mut surface, _log) = surface_with_log(SlowStore {
        delay: Duration::from_millis(10),
    });
    let (first, _) = surface.add_block(BlockType::Image);
    let (second, _) = surface.add_block(BlockType::Image);

    let a = surface
        .begin_upload(&first, UploadSource::new("a.jpg", vec![1]))
        .unwrap();
    let b = surface
        .begin_upload(&second, UploadSource::new("b.jpg", vec![2]))
        .unwrap();
    assert_eq!(surface.uploads_in_flight(), 2);

    let (out_a, out_b) = tokio::join!(a, b);
    surface.finish_upload(out_b).unwrap();
    surface.finish_upload(out_a).unwrap();

    assert_eq!(surface.uploads_in_flight(), 0);
    assert_eq!(
        surface.document().get(&first).unwrap().kind.value(),
        "https://cdn.example/uploads/a.jpg"
    );
    assert_eq!(
        surface.document().get(&second).unwrap().kind.value(),
        "https://cdn.example/uploads/b.jpg"
    );
}

#[tokio::test]
async fn failed_transfer_surfaces_the_error_and_nothing_else() {
    let (mut surface, log) = surface_with_log(SlowStore {
        delay: Duration::from_millis(1),
    });
    let (id, _) = surface.add_block(BlockType::Image);
    let reported = log.borrow().len();

    let transfer = surface
        .begin_upload(&id, UploadSource::new("broken.jpg", vec![]))
        .unwrap();
    let outcome = transfer.await;
    let err = surface.finish_upload(outcome).unwrap_err();

    assert_eq!(
        err,
        UploadError::Transfer("broken.jpg is empty".to_string())
    );
    // No write reached the host and the block still has no URL
    assert_eq!(log.borrow().len(), reported);
    assert_eq!(surface.document().get(&id).unwrap().kind.value(), "");
    assert!(!surface.is_uploading(&id));
}
