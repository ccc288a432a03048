//! Reconciliation and scheduling against an in-memory store and a fake portal.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lab_core::{NewSpecimen, RosterEntry};
use lab_db::SpecimenStore;
use lab_portal::{PortalError, ResultLookup};
use lab_sync::{Outcome, PassReport, Reconciler, Roster, Scheduler, SyncError};
use pretty_assertions::assert_eq;
use tokio::sync::Notify;

const READY_PAGE: &str = "<table><tr>\
    <td>B-1</td><td>SARS-CoV-2</td><td>Not Detected</td>\
    <td>Influenza A</td><td>Detected</td><td>01/02/2024</td><td>Final</td>\
    </tr></table>";

const ODD_PAGE: &str = "<table><tr><td>a</td><td>b</td><td>c</td><td>d</td><td>e</td><td>f</td></tr></table>";

#[derive(Clone)]
enum Reply {
    Page(&'static str),
    Status(u16),
}

/// Canned portal keyed by barcode; unknown barcodes get an empty page.
#[derive(Default)]
struct FakePortal {
    replies: HashMap<String, Reply>,
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<(String, String)>>>,
    notify_after: Option<(usize, Arc<Notify>)>,
}

impl FakePortal {
    fn reply(mut self, barcode: &str, reply: Reply) -> Self {
        self.replies.insert(barcode.to_string(), reply);
        self
    }
}

impl ResultLookup for FakePortal {
    async fn lookup(&self, barcode: &str, date_of_birth: &str) -> Result<Vec<u8>, PortalError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.seen
            .lock()
            .unwrap()
            .push((barcode.to_string(), date_of_birth.to_string()));
        if let Some((after, notify)) = &self.notify_after
            && call == *after
        {
            notify.notify_one();
        }
        match self.replies.get(barcode).cloned() {
            Some(Reply::Page(html)) => Ok(html.as_bytes().to_vec()),
            Some(Reply::Status(status)) => Err(PortalError::Status {
                status,
                message: String::new(),
            }),
            None => Ok(Vec::new()),
        }
    }
}

fn roster() -> Roster {
    Roster::new(vec![RosterEntry {
        name: "Ada".into(),
        date_of_birth: "12/10/1815".into(),
    }])
}

async fn store_with(specimens: &[(&str, &str)]) -> Arc<SpecimenStore> {
    let store = SpecimenStore::open(":memory:").await.unwrap();
    for (name, barcode) in specimens {
        store
            .add_specimen(&NewSpecimen::new(name, barcode).unwrap())
            .await
            .unwrap();
    }
    Arc::new(store)
}

#[tokio::test]
async fn resolved_result_is_committed_once() {
    let store = store_with(&[("Ada", "B-1")]).await;
    let portal = FakePortal::default().reply("B-1", Reply::Page(READY_PAGE));
    let calls = portal.calls.clone();
    let seen = portal.seen.clone();
    let reconciler = Reconciler::new(store.clone(), portal, roster());

    let report = reconciler.run_pass().await.unwrap();
    assert_eq!(
        report,
        PassReport {
            pending: 1,
            resolved: 1,
            ..PassReport::default()
        }
    );
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        [("B-1".to_string(), "12/10/1815".to_string())]
    );

    let recent = store.list_recent(10).await.unwrap();
    assert_eq!(recent[0].results, "SARS-CoV-2 Not Detected | Influenza A Detected");
    assert_eq!(recent[0].sample_date.as_deref(), Some("01/02/2024"));

    // resolved specimens drop out of the pending query
    let second = reconciler.run_pass().await.unwrap();
    assert_eq!(second.pending, 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn soft_failures_leave_specimens_pending() {
    let store = store_with(&[
        ("Ada", "B-empty"),
        ("Ada", "B-odd"),
        ("Ada", "B-down"),
        ("Grace", "B-stranger"),
        ("Ada", "B-ready"),
    ])
    .await;
    let portal = FakePortal::default()
        .reply("B-odd", Reply::Page(ODD_PAGE))
        .reply("B-down", Reply::Status(503))
        .reply("B-ready", Reply::Page(READY_PAGE));
    let calls = portal.calls.clone();
    let reconciler = Reconciler::new(store.clone(), portal, roster());

    let report = reconciler.run_pass().await.unwrap();
    assert_eq!(
        report,
        PassReport {
            pending: 5,
            resolved: 1,
            not_yet_available: 1,
            unrecognized: 1,
            no_roster_match: 1,
            lookup_failed: 1,
            ..PassReport::default()
        }
    );
    // no lookup without a roster match
    assert_eq!(calls.load(Ordering::SeqCst), 4);

    let mut pending: Vec<String> = store
        .list_pending()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.barcode)
        .collect();
    pending.sort();
    assert_eq!(pending, ["B-down", "B-empty", "B-odd", "B-stranger"]);
}

#[tokio::test]
async fn empty_page_leaves_record_unmodified() {
    let store = store_with(&[("Ada", "B-1")]).await;
    let before = store.list_pending().await.unwrap();
    let reconciler = Reconciler::new(store.clone(), FakePortal::default(), roster());

    let outcome = reconciler.reconcile(&before[0]).await.unwrap();
    assert_eq!(outcome, Outcome::NotYetAvailable);
    assert_eq!(store.list_pending().await.unwrap(), before);
}

#[tokio::test]
async fn duplicate_barcode_is_fatal_and_rolled_back() {
    let store = store_with(&[("Ada", "B-1"), ("Ada", "B-1")]).await;
    let portal = FakePortal::default().reply("B-1", Reply::Page(READY_PAGE));
    let reconciler = Reconciler::new(store.clone(), portal, roster());

    let err = reconciler.run_pass().await.unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(
        err,
        SyncError::Integrity { ref barcode, affected: 2 } if barcode == "B-1"
    ));

    let pending = store.list_pending().await.unwrap();
    assert_eq!(pending.len(), 2);
    assert!(pending.iter().all(|s| s.results == "pending"));
}

#[tokio::test]
async fn scheduler_stops_on_integrity_violation() {
    let store = store_with(&[("Ada", "B-1"), ("Ada", "B-1")]).await;
    let portal = FakePortal::default().reply("B-1", Reply::Page(READY_PAGE));
    let calls = portal.calls.clone();
    let scheduler = Scheduler::new(
        Reconciler::new(store, portal, roster()),
        Duration::from_millis(1),
    );

    let err = scheduler.run().await.unwrap_err();
    assert!(matches!(err, SyncError::Integrity { affected: 2, .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn scheduler_repeats_passes_until_shutdown() {
    let store = store_with(&[("Ada", "B-1")]).await;
    let notify = Arc::new(Notify::new());
    let portal = FakePortal {
        notify_after: Some((3, notify.clone())),
        ..FakePortal::default()
    };
    let calls = portal.calls.clone();
    let scheduler = Scheduler::new(
        Reconciler::new(store.clone(), portal, roster()),
        Duration::from_millis(1),
    );

    let passes = scheduler
        .run_until(async move { notify.notified().await })
        .await
        .unwrap();
    assert_eq!(passes, 3);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(store.list_pending().await.unwrap().len(), 1);
}

#[tokio::test]
async fn scheduler_runs_first_pass_without_waiting() {
    let store = store_with(&[("Ada", "B-1")]).await;
    let notify = Arc::new(Notify::new());
    let portal = FakePortal {
        notify_after: Some((1, notify.clone())),
        ..FakePortal::default()
    };
    // an hour-long interval: only the immediate first tick can fire
    let scheduler = Scheduler::new(
        Reconciler::new(store, portal, roster()),
        Duration::from_secs(3600),
    );

    let passes = tokio::time::timeout(
        Duration::from_secs(5),
        scheduler.run_until(async move { notify.notified().await }),
    )
    .await
    .expect("first pass should not wait for the interval")
    .unwrap();
    assert_eq!(passes, 1);
}
