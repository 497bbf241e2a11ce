use super::*;
use crate::net::api::AuthError;
use crate::net::types::Session;
use futures::FutureExt;
use futures::executor::block_on;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

struct FakeAuth {
    session: Result<Option<Session>, AuthError>,
    logout: Result<(), AuthError>,
    log: Log,
    /// Simulates the view unmounting while the query is in flight.
    unmount_during_query: Option<MountGuard>,
}

impl FakeAuth {
    fn new(session: Result<Option<Session>, AuthError>, log: &Log) -> Self {
        Self { session, logout: Ok(()), log: log.clone(), unmount_during_query: None }
    }
}

impl AuthClient for FakeAuth {
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        self.log.borrow_mut().push("query".to_owned());
        if let Some(guard) = &self.unmount_during_query {
            guard.dispose();
        }
        self.session.clone()
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.log.borrow_mut().push("logout".to_owned());
        self.logout.clone()
    }
}

struct NeverSettles;

impl AuthClient for NeverSettles {
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        futures::future::pending().await
    }

    async fn logout(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

fn driver<C: AuthClient>(
    client: C,
    guard: MountGuard,
    log: &Log,
) -> GateDriver<C, impl Fn(&str), impl Fn(GatePhase)> {
    let nav_log = log.clone();
    let phase_log = log.clone();
    GateDriver::new(
        client,
        guard,
        move |path: &str| nav_log.borrow_mut().push(format!("navigate:{path}")),
        move |phase: GatePhase| phase_log.borrow_mut().push(format!("phase:{phase:?}")),
    )
}

fn count(log: &Log, entry: &str) -> usize {
    log.borrow().iter().filter(|e| e.as_str() == entry).count()
}

fn jane() -> Session {
    Session { name: "Jane Doe".to_owned(), picture: None }
}

// =============================================================
// check
// =============================================================

#[test]
fn check_with_session_authenticates_without_redirect() {
    let log = Log::default();
    let gate = driver(FakeAuth::new(Ok(Some(jane())), &log), MountGuard::new(), &log);

    let phase = block_on(gate.check());

    assert_eq!(phase, Some(GatePhase::Authenticated(jane())));
    assert_eq!(count(&log, "query"), 1);
    assert_eq!(count(&log, "navigate:/"), 0);
}

#[test]
fn check_without_session_redirects_to_root_once() {
    let log = Log::default();
    let gate = driver(FakeAuth::new(Ok(None), &log), MountGuard::new(), &log);

    let phase = block_on(gate.check());

    assert_eq!(phase, Some(GatePhase::Redirecting));
    assert_eq!(count(&log, "navigate:/"), 1);
}

#[test]
fn check_failure_redirects_to_root_once() {
    let log = Log::default();
    let client = FakeAuth::new(Err(AuthError::Request("connection refused".into())), &log);
    let gate = driver(client, MountGuard::new(), &log);

    let phase = block_on(gate.check());

    assert_eq!(phase, Some(GatePhase::Redirecting));
    assert_eq!(count(&log, "query"), 1);
    assert_eq!(count(&log, "navigate:/"), 1);
}

#[test]
fn check_applies_phase_before_redirect() {
    let log = Log::default();
    let gate = driver(FakeAuth::new(Ok(None), &log), MountGuard::new(), &log);

    block_on(gate.check());

    assert_eq!(*log.borrow(), vec!["query", "phase:Redirecting", "navigate:/"]);
}

#[test]
fn check_stays_loading_while_query_is_pending() {
    let log = Log::default();
    let gate = driver(NeverSettles, MountGuard::new(), &log);

    assert!(gate.check().now_or_never().is_none());
    assert!(log.borrow().is_empty());
}

#[test]
fn check_result_dropped_after_unmount() {
    let log = Log::default();
    let guard = MountGuard::new();
    let mut client = FakeAuth::new(Ok(None), &log);
    client.unmount_during_query = Some(guard.clone());
    let gate = driver(client, guard, &log);

    assert_eq!(block_on(gate.check()), None);
    assert_eq!(*log.borrow(), vec!["query"]);
}

#[test]
fn check_session_dropped_after_unmount() {
    let log = Log::default();
    let guard = MountGuard::new();
    let mut client = FakeAuth::new(Ok(Some(jane())), &log);
    client.unmount_during_query = Some(guard.clone());
    let gate = driver(client, guard, &log);

    assert_eq!(block_on(gate.check()), None);
    assert_eq!(count(&log, "phase:Redirecting"), 0);
}

// =============================================================
// sign_out
// =============================================================

#[test]
fn sign_out_navigates_after_logout_completes() {
    let log = Log::default();
    let gate = driver(FakeAuth::new(Ok(Some(jane())), &log), MountGuard::new(), &log);

    block_on(gate.sign_out());

    assert_eq!(*log.borrow(), vec!["logout", "phase:Redirecting", "navigate:/"]);
}

#[test]
fn sign_out_navigates_even_when_logout_fails() {
    let log = Log::default();
    let mut client = FakeAuth::new(Ok(Some(jane())), &log);
    client.logout = Err(AuthError::Status(500));
    let gate = driver(client, MountGuard::new(), &log);

    block_on(gate.sign_out());

    assert_eq!(count(&log, "logout"), 1);
    assert_eq!(count(&log, "navigate:/"), 1);
}

#[test]
fn sign_out_after_unmount_still_navigates_without_phase_change() {
    let log = Log::default();
    let guard = MountGuard::new();
    let gate = driver(FakeAuth::new(Ok(Some(jane())), &log), guard.clone(), &log);
    guard.dispose();

    block_on(gate.sign_out());

    assert_eq!(*log.borrow(), vec!["logout", "navigate:/"]);
}

#[test]
fn sign_out_does_not_query_session() {
    let log = Log::default();
    let gate = driver(FakeAuth::new(Ok(Some(jane())), &log), MountGuard::new(), &log);

    block_on(gate.sign_out());

    assert_eq!(count(&log, "query"), 0);
}
