//! Interactive session: reads commands from stdin, moves between screens
//! through the route guard, and prints the screen after every command.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use std::io::Write as _;

use animecards::router::{Route, Router};
use animecards::{ContentApi, ContentStore};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

pub const HELP: &str = "\
commands:
  login <email>   request a token and show the first card
  go <path>       navigate to /, /login, /card or /detail
  card            show the card screen
  detail          show the detail screen
  refresh         fetch another item
  history         list previously shown items
  status          show session status
  logout          sign out and forget the stored session
  help            show this help
  quit            leave the shell
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login(String),
    Go(String),
    Card,
    Detail,
    Refresh,
    History,
    Status,
    Logout,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// Parse one input line. Blank lines parse to `None`.
///
/// # Errors
///
/// Returns a message for unknown commands or missing arguments.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };
    let arg = parts.next();
    let command = match (word.to_ascii_lowercase().as_str(), arg) {
        ("login", Some(email)) => ShellCommand::Login(email.to_owned()),
        ("login", None) => return Err("usage: login <email>".to_owned()),
        ("go", Some(path)) => ShellCommand::Go(path.to_owned()),
        ("go", None) => return Err("usage: go <path>".to_owned()),
        ("card", _) => ShellCommand::Card,
        ("detail", _) => ShellCommand::Detail,
        ("refresh", _) => ShellCommand::Refresh,
        ("history", _) => ShellCommand::History,
        ("status", _) => ShellCommand::Status,
        ("logout", _) => ShellCommand::Logout,
        ("help" | "?", _) => ShellCommand::Help,
        ("quit" | "exit", _) => ShellCommand::Quit,
        (other, _) => return Err(format!("unknown command `{other}`; try `help`")),
    };
    Ok(Some(command))
}

pub struct Shell<A> {
    store: ContentStore<A>,
    router: Router,
}

impl<A: ContentApi> Shell<A> {
    pub fn new(store: ContentStore<A>) -> Self {
        Self { store, router: Router::new() }
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.router.current()
    }

    /// Resume any stored session and enter `/`.
    pub async fn start(&mut self) -> String {
        self.store.initialize().await;
        self.enter(Route::Root)
    }

    pub async fn execute(&mut self, command: ShellCommand) -> Outcome {
        let output = match command {
            ShellCommand::Login(email) => self.login(&email).await,
            ShellCommand::Go(path) => match self.router.navigate(&path, &self.store) {
                Ok(route) => {
                    self.sync_view(route);
                    self.render()
                }
                Err(e) => format!("{e}\n"),
            },
            ShellCommand::Card => self.enter(Route::Card),
            ShellCommand::Detail => self.enter(Route::Detail),
            ShellCommand::Refresh => {
                if self.store.is_authenticated() {
                    if let Err(e) = self.store.refresh_content().await {
                        tracing::debug!(error = %e, "refresh failed");
                    }
                }
                self.render()
            }
            ShellCommand::History => render::history_list(self.store.history()),
            ShellCommand::Status => self.status(),
            ShellCommand::Logout => {
                self.store.logout();
                self.enter(Route::Login)
            }
            ShellCommand::Help => HELP.to_owned(),
            ShellCommand::Quit => return Outcome::Quit,
        };
        Outcome::Continue(output)
    }

    /// Read-eval-print until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin or stdout fails.
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", self.start().await)?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            write!(stdout, "{}> ", self.route())?;
            stdout.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(stdout)?;
                break;
            };
            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(command)) => match self.execute(command).await {
                    Outcome::Continue(output) => write!(stdout, "{output}")?,
                    Outcome::Quit => break,
                },
                Err(message) => writeln!(stdout, "{message}")?,
            }
        }
        Ok(())
    }

    async fn login(&mut self, email: &str) -> String {
        if self.store.is_authenticated() {
            return format!(
                "Already signed in as {}. Enter `logout` first.\n",
                self.store.user_email()
            );
        }
        match self.store.authenticate(email).await {
            Ok(()) => self.enter(Route::Card),
            Err(e) => {
                tracing::debug!(error = %e, "login failed");
                self.enter(Route::Login)
            }
        }
    }

    fn enter(&mut self, route: Route) -> String {
        let landed = self.router.push(route, &self.store);
        self.sync_view(landed);
        self.render()
    }

    fn sync_view(&mut self, route: Route) {
        match route {
            Route::Card => self.store.show_card(),
            Route::Detail => self.store.show_detail(),
            Route::Root | Route::Login => {}
        }
    }

    fn status(&self) -> String {
        let email = self.store.user_email();
        format!(
            "route:         {}\nsigned in:     {}\nemail:         {}\ntoken held:    {}\nhistory items: {}\n",
            self.route(),
            self.store.is_authenticated(),
            if email.is_empty() { "-" } else { email },
            self.store.api().is_authenticated(),
            self.store.history().len(),
        )
    }

    #[must_use]
    pub fn render(&self) -> String {
        render::screen(self.route(), &self.store)
    }
}
