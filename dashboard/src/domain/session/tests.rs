//! Tests for the session service and auth gate.

use super::*;
use crate::domain::ports::{
    FixtureLoginService, InMemoryKeyValueStore, KeyValueStoreError, MockKeyValueStore,
};
use rstest::{fixture, rstest};

type FixtureSession = SessionService<InMemoryKeyValueStore, FixtureLoginService>;

#[fixture]
fn store() -> Arc<InMemoryKeyValueStore> {
    Arc::new(InMemoryKeyValueStore::new())
}

fn session(store: &Arc<InMemoryKeyValueStore>) -> FixtureSession {
    SessionService::new(Arc::clone(store), Arc::new(FixtureLoginService))
}

#[rstest]
fn successful_login_sets_the_flag_and_routes_home(store: Arc<InMemoryKeyValueStore>) {
    let service = session(&store);

    let route = service.login("admin", "Admin@123").expect("login");

    assert_eq!(route, Route::Home);
    assert!(service.is_authenticated());
    assert_eq!(
        store.get(SESSION_FLAG_KEY).expect("read").as_deref(),
        Some("true")
    );
}

#[rstest]
#[case("admin", "wrong")]
#[case("root", "Admin@123")]
#[case("admin ", "Admin@123")]
#[case("ADMIN", "ADMIN@123")]
fn wrong_pairs_fail_and_leave_the_flag_unset(
    store: Arc<InMemoryKeyValueStore>,
    #[case] username: &str,
    #[case] password: &str,
) {
    let service = session(&store);

    let err = service.login(username, password).expect_err("rejected");

    assert_eq!(err, LoginError::InvalidCredentials);
    assert!(!service.is_authenticated());
    assert_eq!(store.get(SESSION_FLAG_KEY).expect("read"), None);
}

#[rstest]
#[case("", "Admin@123")]
#[case("admin", "   ")]
fn blank_fields_fail_before_the_credential_check(
    store: Arc<InMemoryKeyValueStore>,
    #[case] username: &str,
    #[case] password: &str,
) {
    let service = session(&store);
    let err = service.login(username, password).expect_err("blank");
    assert!(matches!(err, LoginError::MissingInput { .. }));
    assert_eq!(service.state(), SessionState::Unauthenticated);
}

#[rstest]
fn logout_clears_the_flag_and_routes_to_login(store: Arc<InMemoryKeyValueStore>) {
    let service = session(&store);
    service.login("admin", "Admin@123").expect("login");

    let route = service.logout().expect("logout");

    assert_eq!(route, Route::Login);
    assert_eq!(service.state(), SessionState::Unauthenticated);
}

#[rstest]
fn logout_is_idempotent(store: Arc<InMemoryKeyValueStore>) {
    let service = session(&store);
    service.logout().expect("first logout");
    service.logout().expect("second logout");
    assert_eq!(store.get(SESSION_FLAG_KEY).expect("read"), None);
}

#[rstest]
fn initial_state_comes_from_storage() {
    let store = Arc::new(InMemoryKeyValueStore::with_entries([(SESSION_FLAG_KEY, "true")]));
    let service = session(&store);
    assert_eq!(service.state(), SessionState::Authenticated);
}

#[rstest]
#[case("false")]
#[case("TRUE")]
#[case("1")]
fn only_the_exact_flag_value_counts(#[case] value: &str) {
    let store = Arc::new(InMemoryKeyValueStore::with_entries([(SESSION_FLAG_KEY, value)]));
    assert!(!session(&store).is_authenticated());
}

#[rstest]
fn unreadable_storage_reads_as_logged_out() {
    let mut store = MockKeyValueStore::new();
    store
        .expect_get()
        .returning(|key| Err(KeyValueStoreError::read(key, "disk gone")));
    let service = SessionService::new(Arc::new(store), Arc::new(FixtureLoginService));
    assert!(!service.is_authenticated());
}

#[rstest]
fn login_reports_storage_failures() {
    let mut store = MockKeyValueStore::new();
    store
        .expect_set()
        .times(1)
        .returning(|key, _| Err(KeyValueStoreError::write(key, "read-only")));
    let service = SessionService::new(Arc::new(store), Arc::new(FixtureLoginService));

    let err = service.login("admin", "Admin@123").expect_err("storage");
    assert!(matches!(err, LoginError::Storage { .. }));
}

#[rstest]
fn logout_reports_storage_failures() {
    let mut store = MockKeyValueStore::new();
    store
        .expect_remove()
        .times(1)
        .returning(|key| Err(KeyValueStoreError::write(key, "read-only")));
    let service = SessionService::new(Arc::new(store), Arc::new(FixtureLoginService));

    let err = service.logout().expect_err("storage");
    assert!(matches!(err, SessionError::Storage { .. }));
}

#[rstest]
fn gate_redirects_without_rendering_when_logged_out(store: Arc<InMemoryKeyValueStore>) {
    let gate = AuthGate::new(Arc::clone(&store));
    let mut rendered = false;

    let outcome = gate.activate(|| rendered = true);

    assert_eq!(outcome, GateOutcome::Redirect(Route::Login));
    assert!(!rendered);
}

#[rstest]
fn gate_renders_when_logged_in(store: Arc<InMemoryKeyValueStore>) {
    session(&store).login("admin", "Admin@123").expect("login");
    let gate = AuthGate::new(Arc::clone(&store));

    assert_eq!(gate.activate(|| 42), GateOutcome::Render(42));
}

#[rstest]
fn gate_rereads_storage_on_every_activation(store: Arc<InMemoryKeyValueStore>) {
    let service = session(&store);
    let gate = AuthGate::new(Arc::clone(&store));

    service.login("admin", "Admin@123").expect("login");
    assert_eq!(gate.activate(|| ()), GateOutcome::Render(()));

    service.logout().expect("logout");
    assert_eq!(gate.activate(|| ()), GateOutcome::Redirect(Route::Login));
}

#[rstest]
fn forged_flag_grants_access() {
    let store = Arc::new(InMemoryKeyValueStore::with_entries([(SESSION_FLAG_KEY, "true")]));
    let gate = AuthGate::new(store);
    assert_eq!(gate.activate(|| "in"), GateOutcome::Render("in"));
}

#[rstest]
#[case(Route::Login, "/login")]
#[case(Route::Home, "/")]
#[case(Route::Employee(UserId::new(5)), "/employee/5")]
fn routes_render_as_paths(#[case] route: Route, #[case] expected: &str) {
    assert_eq!(route.to_string(), expected);
}
