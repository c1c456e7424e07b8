use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, anyhow};
use fittrack_types::Profile;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::sync::Mutex;

/// Every stored profile, keyed by user name.
pub type Profiles = BTreeMap<String, Profile>;

/// JSON file holding one record per user.
///
/// Each write goes to a sibling `.tmp` file that is then renamed over the
/// store, so readers see either the old or the new contents. Writes
/// through clones of the same handle are serialised, so concurrent
/// appends cannot drop each other.
#[derive(Clone)]
pub struct ProfileStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl ProfileStore {
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty store.
    pub async fn load_all(&self) -> anyhow::Result<Profiles> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet", self.path.display());
                return Ok(Profiles::new());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing profiles from {}", self.path.display()))
    }

    pub async fn get(&self, user: &str) -> anyhow::Result<Option<Profile>> {
        Ok(self.load_all().await?.remove(user))
    }

    /// Inserts or replaces the record for `user`.
    pub async fn save(&self, user: &str, profile: &Profile) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut profiles = self.load_all().await?;
        profiles.insert(user.to_owned(), profile.clone());
        self.write_all(&profiles).await?;

        info!("saved profile for {user}");
        Ok(())
    }

    /// Inserts `profile` only when `user` is free. Returns `false` and
    /// writes nothing when the name is taken.
    pub async fn insert_new(&self, user: &str, profile: &Profile) -> anyhow::Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut profiles = self.load_all().await?;
        if profiles.contains_key(user) {
            return Ok(false);
        }

        profiles.insert(user.to_owned(), profile.clone());
        self.write_all(&profiles).await?;

        info!("created profile for {user}");
        Ok(true)
    }

    /// Read-modify-write of one record. Nothing is written when the user
    /// is unknown or `modify` fails.
    pub async fn update<T, F>(&self, user: &str, modify: F) -> anyhow::Result<T>
    where
        F: FnOnce(&mut Profile) -> anyhow::Result<T>,
    {
        let _guard = self.write_lock.lock().await;
        let mut profiles = self.load_all().await?;
        let profile = profiles
            .get_mut(user)
            .ok_or_else(|| anyhow!("no profile stored for `{user}`"))?;

        let value = modify(profile)?;
        self.write_all(&profiles).await?;

        info!("updated profile for {user}");
        Ok(value)
    }

    async fn write_all(&self, profiles: &Profiles) -> anyhow::Result<()> {
        let mut bytes = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
        profiles.serialize(&mut serializer)?;

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, bytes)
            .await
            .with_context(|| format!("writing {}", tmp_path.display()))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .with_context(|| format!("replacing {}", self.path.display()))
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
