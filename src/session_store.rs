use crate::{
    data::user::SessionUser,
    error::{
        ReadSessionSnafu, RmpSerdeDecodeSnafu, RmpSerdeEncodeSnafu, WardenResult,
        WriteSessionSnafu,
    },
};
use snafu::ResultExt;
use std::{fmt::Debug, io::ErrorKind, path::PathBuf};

///Where the "logged in as" display is remembered between runs.
///
///This only drives what the page shows: nothing read from here is ever sent to the backend.
pub trait SessionStore: Debug + Send + Sync {
    fn load(&self) -> WardenResult<Option<SessionUser>>;
    fn save(&self, user: &SessionUser) -> WardenResult<()>;
    fn clear(&self) -> WardenResult<()>;
}

///Keeps the user in a single msgpack file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> WardenResult<Option<SessionUser>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).context(ReadSessionSnafu { path: self.path.clone() }),
        };

        rmp_serde::from_slice(&bytes)
            .context(RmpSerdeDecodeSnafu)
            .map(Some)
    }

    fn save(&self, user: &SessionUser) -> WardenResult<()> {
        let serialised = rmp_serde::to_vec_named(user).context(RmpSerdeEncodeSnafu)?;
        std::fs::write(&self.path, serialised).context(WriteSessionSnafu {
            path: self.path.clone(),
        })
    }

    fn clear(&self) -> WardenResult<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e).context(WriteSessionSnafu {
                path: self.path.clone(),
            }),
            _ => Ok(()),
        }
    }
}
