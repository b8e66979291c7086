use crate::error::{TerminalSnafu, WardenResult};
use secrecy::SecretString;
use serde::Deserialize;
use snafu::ResultExt;
use std::io::{BufRead, Write};

#[derive(Debug, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: SecretString,
}

#[derive(Debug, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: SecretString,
}

///Somewhere to get credentials from. `Ok(None)` means the user backed out.
pub trait CredentialPrompt {
    fn login_credentials(&mut self) -> WardenResult<Option<LoginCredentials>>;
    fn registration(&mut self) -> WardenResult<Option<Registration>>;
}

///Credentials that already arrived from the login or register modal. Each submission can only
///be handed out once.
#[derive(Debug, Default)]
pub struct FormPrompt {
    login: Option<LoginCredentials>,
    registration: Option<Registration>,
}

impl FormPrompt {
    pub fn login(credentials: LoginCredentials) -> Self {
        Self {
            login: Some(credentials),
            registration: None,
        }
    }

    pub fn register(registration: Registration) -> Self {
        Self {
            login: None,
            registration: Some(registration),
        }
    }
}

impl CredentialPrompt for FormPrompt {
    fn login_credentials(&mut self) -> WardenResult<Option<LoginCredentials>> {
        Ok(self.login.take())
    }

    fn registration(&mut self) -> WardenResult<Option<Registration>> {
        Ok(self.registration.take())
    }
}

///Asks one question per line and gives up at the first blank answer.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl LinePrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> WardenResult<Option<String>> {
        write!(self.output, "{question} ").context(TerminalSnafu)?;
        self.output.flush().context(TerminalSnafu)?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer).context(TerminalSnafu)? == 0 {
            return Ok(None);
        }

        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }
}

impl<R: BufRead, W: Write> CredentialPrompt for LinePrompt<R, W> {
    fn login_credentials(&mut self) -> WardenResult<Option<LoginCredentials>> {
        let Some(username) = self.ask("Enter username:")? else {
            return Ok(None);
        };
        let Some(password) = self.ask("Enter password:")? else {
            return Ok(None);
        };

        Ok(Some(LoginCredentials {
            username,
            password: password.into(),
        }))
    }

    fn registration(&mut self) -> WardenResult<Option<Registration>> {
        let Some(username) = self.ask("Choose a username:")? else {
            return Ok(None);
        };
        let Some(email) = self.ask("Enter email:")? else {
            return Ok(None);
        };
        let Some(password) = self.ask("Choose a password:")? else {
            return Ok(None);
        };

        Ok(Some(Registration {
            username,
            email,
            password: password.into(),
        }))
    }
}
