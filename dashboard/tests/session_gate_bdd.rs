//! Behaviour tests for the session flag and the gate in front of protected
//! views, backed by a real data directory.
//
// rstest-bdd generates guard variables with double underscores, which trips
// the non_snake_case lint under -D warnings.
#![allow(non_snake_case)]

use std::cell::RefCell;
use std::sync::Arc;

use camino::Utf8PathBuf;
use hr_dashboard::domain::ports::{
    FIXTURE_PASSWORD, FIXTURE_USERNAME, FixtureLoginService, KeyValueStore, SESSION_FLAG_KEY,
};
use hr_dashboard::domain::{AuthGate, GateOutcome, LoginError, Route, SessionService};
use hr_dashboard::outbound::storage::FileKeyValueStore;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

struct SessionWorld {
    _temp: TempDir,
    root: Utf8PathBuf,
    store: RefCell<Arc<FileKeyValueStore>>,
    last_login: RefCell<Option<Result<Route, LoginError>>>,
}

impl SessionWorld {
    fn store(&self) -> Arc<FileKeyValueStore> {
        Arc::clone(&self.store.borrow())
    }

    fn session(&self) -> SessionService<FileKeyValueStore, FixtureLoginService> {
        SessionService::new(self.store(), Arc::new(FixtureLoginService))
    }

    fn login(&self, username: &str, password: &str) {
        let result = self.session().login(username, password);
        self.last_login.replace(Some(result));
    }

    fn last_login(&self) -> Result<Route, LoginError> {
        self.last_login
            .borrow()
            .clone()
            .expect("a login should have been attempted")
    }
}

#[fixture]
fn world() -> SessionWorld {
    let temp = TempDir::new().expect("temp dir");
    let root = Utf8PathBuf::from_path_buf(temp.path().join("data")).expect("utf-8 temp path");
    let store = FileKeyValueStore::open(&root).expect("open store");
    SessionWorld {
        _temp: temp,
        root,
        store: RefCell::new(Arc::new(store)),
        last_login: RefCell::new(None),
    }
}

#[given("a fresh data directory")]
fn a_fresh_data_directory(world: &SessionWorld) {
    assert_eq!(
        world.store().get(SESSION_FLAG_KEY).expect("read flag"),
        None
    );
}

#[given("an operator who is logged in")]
fn an_operator_who_is_logged_in(world: &SessionWorld) {
    world.login(FIXTURE_USERNAME, FIXTURE_PASSWORD);
    assert_eq!(world.last_login(), Ok(Route::Home));
}

#[when("the operator logs in with username {username} and password {password}")]
fn the_operator_logs_in(world: &SessionWorld, username: String, password: String) {
    world.login(&username, &password);
}

#[when("the operator submits the form with a blank username")]
fn the_operator_submits_a_blank_username(world: &SessionWorld) {
    world.login("   ", FIXTURE_PASSWORD);
}

#[when("the operator logs out")]
fn the_operator_logs_out(world: &SessionWorld) {
    let route = world.session().logout().expect("logout succeeds");
    assert_eq!(route, Route::Login);
}

#[when("the dashboard restarts")]
fn the_dashboard_restarts(world: &SessionWorld) {
    let reopened = FileKeyValueStore::open(&world.root).expect("reopen store");
    world.store.replace(Arc::new(reopened));
}

#[then("login fails with invalid credentials")]
fn login_fails_with_invalid_credentials(world: &SessionWorld) {
    assert_eq!(world.last_login(), Err(LoginError::InvalidCredentials));
}

#[then("login fails with missing input")]
fn login_fails_with_missing_input(world: &SessionWorld) {
    assert!(matches!(
        world.last_login(),
        Err(LoginError::MissingInput { .. })
    ));
}

#[then("the session flag is absent")]
fn the_session_flag_is_absent(world: &SessionWorld) {
    assert!(!world.session().is_authenticated());
}

#[then("the session flag is present")]
fn the_session_flag_is_present(world: &SessionWorld) {
    assert!(world.session().is_authenticated());
}

#[then("the protected view redirects to the login page")]
fn the_protected_view_redirects(world: &SessionWorld) {
    let gate = AuthGate::new(world.store());
    assert_eq!(
        gate.activate(|| "users"),
        GateOutcome::Redirect(Route::Login)
    );
}

#[then("the protected view renders")]
fn the_protected_view_renders(world: &SessionWorld) {
    let gate = AuthGate::new(world.store());
    assert_eq!(gate.activate(|| "users"), GateOutcome::Render("users"));
}

#[scenario(
    path = "tests/features/session_gate.feature",
    name = "Wrong credentials are rejected"
)]
fn wrong_credentials_are_rejected(world: SessionWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_gate.feature",
    name = "Blank fields are reported before checking credentials"
)]
fn blank_fields_are_reported(world: SessionWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_gate.feature",
    name = "A successful login survives a restart"
)]
fn a_successful_login_survives_a_restart(world: SessionWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_gate.feature",
    name = "Logging out twice is harmless"
)]
fn logging_out_twice_is_harmless(world: SessionWorld) {
    drop(world);
}
