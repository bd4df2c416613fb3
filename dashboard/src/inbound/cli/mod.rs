//! Command-line front end standing in for the dashboard's browser views.
//!
//! Each subcommand is one view or one button press. Protected commands run
//! behind the [`AuthGate`]; when the session flag is missing they print the
//! login redirect and touch nothing else. Output goes to the supplied
//! writer so tests can capture it.

mod render;

use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::domain::ports::{
    KeyValueStore, LoginService, RatingSource, UserSource, UserSourceError,
};
use crate::domain::{
    ALL_SENTINEL, AuthGate, BookmarkStore, FilterCriteria, GateOutcome, LoadState, NewUserDraft,
    Notice, RECENT_USERS, Rating, Selector, SessionService, UserDirectory, UserId, UserRecord,
    UsersView, create_user, distinct_departments, filter_users, recent_users, search_directory,
    summary_counts,
};

/// `hr-dashboard` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hr-dashboard",
    about = "Session-gated HR directory with local bookmarks and filtering",
    version
)]
pub struct Cli {
    /// View or action to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level views and actions.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Submit the login form.
    Login(LoginArgs),
    /// Clear the session.
    Logout,
    /// Show whether a session is active.
    Status,
    /// Summary counts, recent users and directory search.
    Home {
        /// Match first name, last name, role or department.
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Full listing with fresh ratings.
    Users(FilterArgs),
    /// Distinct departments in the listing.
    Departments,
    /// Employee detail view.
    Show {
        /// Employee id.
        id: UserId,
    },
    /// Add a user to the in-memory listing.
    CreateUser(CreateUserArgs),
    /// Bookmarked users.
    #[command(subcommand)]
    Bookmarks(BookmarkCommand),
}

/// Login form fields. Blank fields are reported, not prompted for.
#[derive(Debug, Clone, Args)]
pub struct LoginArgs {
    /// Username.
    #[arg(long, default_value = "")]
    pub username: String,
    /// Password.
    #[arg(long, default_value = "")]
    pub password: String,
}

/// Listing filters combined with logical AND.
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Case-insensitive match on first name, last name or email.
    #[arg(long, default_value = "")]
    pub query: String,
    /// Exact department, or "All".
    #[arg(long, default_value = ALL_SENTINEL)]
    pub department: Selector<String>,
    /// Exact rating, or "All".
    #[arg(long, default_value = ALL_SENTINEL)]
    pub rating: Selector<Rating>,
}

impl FilterArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria::default()
            .with_query(self.query.clone())
            .with_department(self.department.clone())
            .with_rating(self.rating.clone())
    }
}

/// "Create User" form fields.
#[derive(Debug, Clone, Args)]
pub struct CreateUserArgs {
    /// First name.
    #[arg(long, default_value = "")]
    pub first_name: String,
    /// Last name.
    #[arg(long, default_value = "")]
    pub last_name: String,
    /// Email address.
    #[arg(long, default_value = "")]
    pub email: String,
    /// Age in years.
    #[arg(long, default_value = "")]
    pub age: String,
    /// Department.
    #[arg(long, default_value = "")]
    pub department: String,
}

/// Bookmarks view and its per-user actions.
#[derive(Debug, Clone, Subcommand)]
pub enum BookmarkCommand {
    /// List bookmarked users.
    List(FilterArgs),
    /// Bookmark a listed user.
    Add {
        /// Employee id.
        id: UserId,
    },
    /// Remove a bookmark.
    Remove {
        /// Employee id.
        id: UserId,
    },
    /// Bookmark when absent, remove when present.
    Toggle {
        /// Employee id.
        id: UserId,
    },
    /// Acknowledge a promotion.
    Promote {
        /// Employee id.
        id: UserId,
    },
    /// Acknowledge a project assignment.
    Assign {
        /// Employee id.
        id: UserId,
    },
}

/// The dashboard's views wired to their stores and sources.
pub struct Dashboard<S, L, U, R> {
    session: SessionService<S, L>,
    gate: AuthGate<S>,
    bookmarks: BookmarkStore<S>,
    directory: UserDirectory<U, R>,
    view: UsersView,
}

impl<S, L, U, R> Dashboard<S, L, U, R>
where
    S: KeyValueStore,
    L: LoginService,
    U: UserSource,
    R: RatingSource,
{
    /// Wire the views over one key/value store.
    pub fn new(store: Arc<S>, login_service: Arc<L>, directory: UserDirectory<U, R>) -> Self {
        Self {
            session: SessionService::new(Arc::clone(&store), login_service),
            gate: AuthGate::new(Arc::clone(&store)),
            bookmarks: BookmarkStore::new(store),
            directory,
            view: UsersView::new(),
        }
    }

    /// Run one command, writing its output to `out`.
    ///
    /// Domain failures are rendered as notices; only write failures are
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns the writer's I/O error.
    pub async fn run<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        match command {
            Command::Login(args) => self.login(&args, out),
            Command::Logout => self.logout(out),
            Command::Status => render::status(out, self.session.state()),
            protected => match self.gate.activate(|| ()) {
                GateOutcome::Redirect(route) => render::redirect(out, route),
                GateOutcome::Render(()) => self.run_protected(protected, out).await,
            },
        }
    }

    async fn run_protected<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        debug!(?command, "running protected command");
        match command {
            Command::Home { search } => self.home(&search, out).await,
            Command::Users(filters) => self.users(&filters, out).await,
            Command::Departments => self.departments(out).await,
            Command::Show { id } => self.show(id, out).await,
            Command::CreateUser(args) => self.create(&args, out).await,
            Command::Bookmarks(action) => self.bookmark_action(action, out).await,
            Command::Login(_) | Command::Logout | Command::Status => Ok(()),
        }
    }

    fn login<W: Write>(&self, args: &LoginArgs, out: &mut W) -> io::Result<()> {
        match self.session.login(&args.username, &args.password) {
            Ok(route) => render::navigated(out, "Logged in.", route),
            Err(err) => render::notice(out, &Notice::login_failed(&err)),
        }
    }

    fn logout<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.session.logout() {
            Ok(route) => render::navigated(out, "Logged out.", route),
            Err(err) => writeln!(out, "[error] {err}"),
        }
    }

    async fn home<W: Write>(&self, search: &str, out: &mut W) -> io::Result<()> {
        let users = match self.directory.fetch_unrated().await {
            Ok(users) => users,
            Err(err) => return render::fetch_failed(out, &err),
        };

        render::heading(out, "Summary")?;
        render::summary(out, &summary_counts(&users))?;
        render::heading(out, "Recent Users")?;
        render::user_cards(out, recent_users(&users, RECENT_USERS), |_| false)?;
        render::heading(out, "Search Results")?;
        if search.trim().is_empty() {
            return render::empty(out, "Type in the search bar to find users.");
        }
        let found = search_directory(&users, search);
        if found.is_empty() {
            render::empty(out, "No users found matching your search.")
        } else {
            render::user_cards(out, found, |_| false)
        }
    }

    /// Start a listing load and apply its result to the view.
    async fn load_listing(&self) -> LoadState {
        let ticket = self.view.begin_load();
        let applied = ticket.complete(self.directory.fetch_rated().await);
        if !applied {
            debug!("listing load discarded");
        }
        self.view.state()
    }

    fn bookmarked_ids(&mut self) -> HashSet<UserId> {
        self.bookmarks.list().iter().map(|user| user.id).collect()
    }

    async fn users<W: Write>(&mut self, filters: &FilterArgs, out: &mut W) -> io::Result<()> {
        let users = match self.load_listing().await {
            LoadState::Ready(users) => users,
            state => return listing_unavailable(out, &state),
        };
        let saved = self.bookmarked_ids();
        let matching = filter_users(&users, &filters.criteria());
        if matching.is_empty() {
            return render::empty(out, "No users match the current filters.");
        }
        render::user_cards(out, matching, |id| saved.contains(&id))
    }

    async fn departments<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.load_listing().await {
            LoadState::Ready(users) => render::departments(out, &distinct_departments(&users)),
            state => listing_unavailable(out, &state),
        }
    }

    async fn show<W: Write>(&self, id: UserId, out: &mut W) -> io::Result<()> {
        match self.directory.fetch_detail(id).await {
            Ok(user) => render::detail(out, &user),
            Err(err @ UserSourceError::NotFound { .. }) => writeln!(out, "[error] {err}"),
            Err(err) => render::fetch_failed(out, &err),
        }
    }

    async fn create<W: Write>(&self, args: &CreateUserArgs, out: &mut W) -> io::Result<()> {
        let draft = match NewUserDraft::try_from_parts(
            &args.first_name,
            &args.last_name,
            &args.email,
            &args.age,
            &args.department,
        ) {
            Ok(draft) => draft,
            Err(err) => return render::draft_errors(out, &err),
        };

        let mut users = match self.load_listing().await {
            LoadState::Ready(users) => users,
            state => {
                listing_unavailable(out, &state)?;
                Vec::new()
            }
        };
        let created = match create_user(&mut users, draft) {
            Ok(created) => created,
            Err(err) => return writeln!(out, "[error] {err}"),
        };
        render::notice(out, &Notice::user_created(&created))?;
        render::user_cards(out, recent_users(&users, RECENT_USERS), |_| false)
    }

    async fn bookmark_action<W: Write>(
        &mut self,
        action: BookmarkCommand,
        out: &mut W,
    ) -> io::Result<()> {
        match action {
            BookmarkCommand::List(filters) => {
                let bookmarks = self.bookmarks.load();
                let matching = filter_users(bookmarks, &filters.criteria());
                if matching.is_empty() {
                    render::empty(out, "No matching bookmarks found.")
                } else {
                    render::user_cards(out, matching, |_| true)
                }
            }
            BookmarkCommand::Add { id } => {
                let Some(user) = self.listed_user(id, out).await? else {
                    return Ok(());
                };
                let notice = match self.bookmarks.add(user.clone()) {
                    Ok(()) => Notice::bookmarked(&user),
                    Err(err) => Notice::bookmark_failed(&user, &err),
                };
                render::notice(out, &notice)
            }
            BookmarkCommand::Remove { id } => {
                let notice = match self.bookmarks.remove(id) {
                    Ok(()) => Notice::unbookmarked(),
                    Err(err) => Notice::storage_failed(&err),
                };
                render::notice(out, &notice)
            }
            BookmarkCommand::Toggle { id } => {
                let stored = self.bookmarks.get(id).cloned();
                let user = match stored {
                    Some(user) => user,
                    None => match self.listed_user(id, out).await? {
                        Some(user) => user,
                        None => return Ok(()),
                    },
                };
                let notice = match self.bookmarks.toggle(user.clone()) {
                    Ok(outcome) => Notice::toggled(&user, outcome),
                    Err(err) => Notice::bookmark_failed(&user, &err),
                };
                render::notice(out, &notice)
            }
            BookmarkCommand::Promote { id } => {
                let notice = self
                    .bookmarks
                    .get(id)
                    .map_or_else(|| Notice::not_bookmarked(id), Notice::promoted);
                render::notice(out, &notice)
            }
            BookmarkCommand::Assign { id } => {
                let notice = self
                    .bookmarks
                    .get(id)
                    .map_or_else(|| Notice::not_bookmarked(id), Notice::assigned);
                render::notice(out, &notice)
            }
        }
    }

    /// Find `id` in a fresh listing, reporting why when it cannot.
    async fn listed_user<W: Write>(
        &self,
        id: UserId,
        out: &mut W,
    ) -> io::Result<Option<UserRecord>> {
        match self.load_listing().await {
            LoadState::Ready(users) => {
                let found = users.into_iter().find(|user| user.id == id);
                if found.is_none() {
                    writeln!(out, "[error] {}", UserSourceError::not_found(id))?;
                }
                Ok(found)
            }
            state => {
                listing_unavailable(out, &state)?;
                Ok(None)
            }
        }
    }
}

fn listing_unavailable<W: Write>(out: &mut W, state: &LoadState) -> io::Result<()> {
    match state {
        LoadState::Failed(message) => writeln!(out, "[error] Failed to load users: {message}"),
        LoadState::Idle | LoadState::Loading | LoadState::Ready(_) => {
            writeln!(out, "Loading users...")
        }
    }
}
