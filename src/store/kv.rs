use std::{
    path::{Path, PathBuf},
    sync::{mpsc, Arc, Mutex},
    thread::{self, JoinHandle},
};

use anyhow::{anyhow, bail, Context, Result};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use tokio::sync::oneshot;

const CURRENT_SCHEMA_VERSION: i32 = 1;

type KvTask = Box<dyn FnOnce(&mut Connection) + Send + 'static>;

enum KvCommand {
    Execute(KvTask),
    Shutdown,
}

struct KvStoreInner {
    sender: mpsc::Sender<KvCommand>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for KvStoreInner {
    fn drop(&mut self) {
        let mut guard = match self.worker.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(handle) = guard.take() {
            if let Err(err) = self.sender.send(KvCommand::Shutdown) {
                error!("Failed to send shutdown to storage thread: {err}");
            }
            if let Err(join_err) = handle.join() {
                error!("Failed to join storage thread: {join_err:?}");
            }
        }
    }
}

fn run_migrations(conn: &mut Connection) -> Result<()> {
    let version: i32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .context("failed to read user_version pragma")?;

    if version > CURRENT_SCHEMA_VERSION {
        bail!(
            "storage version ({}) is newer than supported schema ({})",
            version,
            CURRENT_SCHEMA_VERSION
        );
    }

    if version == CURRENT_SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn
        .transaction()
        .context("failed to open migration transaction")?;
    tx.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );",
    )
    .context("failed to create kv table")?;
    tx.pragma_update(None, "user_version", CURRENT_SCHEMA_VERSION)
        .context("failed to update user_version pragma")?;
    tx.commit().context("failed to commit migrations")?;

    Ok(())
}

/// Key-value persistence: one JSON document per key, held in SQLite behind a
/// dedicated worker thread. All access goes through `execute`, which ships a
/// closure to the worker and awaits the reply.
#[derive(Clone)]
pub struct KvStore {
    inner: Arc<KvStoreInner>,
    db_path: Arc<PathBuf>,
}

impl KvStore {
    pub fn new(db_path: PathBuf) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create storage directory {}", parent.display())
            })?;
        }

        let (command_tx, command_rx) = mpsc::channel::<KvCommand>();
        let (ready_tx, ready_rx) = mpsc::channel();
        let path_for_thread = db_path.clone();

        let worker = thread::Builder::new()
            .name("anker-storage".into())
            .spawn(move || {
                let mut conn = match Connection::open(&path_for_thread) {
                    Ok(connection) => connection,
                    Err(err) => {
                        let _ = ready_tx.send(
                            Err(anyhow::Error::new(err).context("failed to open storage database")),
                        );
                        return;
                    }
                };

                if let Err(err) = conn.pragma_update(None, "journal_mode", "WAL") {
                    error!("Failed to enable WAL mode: {err}");
                }

                let init_result = run_migrations(&mut conn).context("failed to run migrations");
                if ready_tx.send(init_result).is_err() {
                    error!("Storage initialization receiver dropped before ready signal");
                    return;
                }

                while let Ok(command) = command_rx.recv() {
                    match command {
                        KvCommand::Execute(task) => {
                            task(&mut conn);
                        }
                        KvCommand::Shutdown => break,
                    }
                }

                info!("Storage thread shutting down");
            })
            .with_context(|| "failed to spawn storage worker thread")?;

        ready_rx
            .recv()
            .context("storage worker exited before signaling readiness")??;

        info!("Storage initialized at {}", db_path.display());

        Ok(Self {
            inner: Arc::new(KvStoreInner {
                sender: command_tx,
                worker: Mutex::new(Some(worker)),
            }),
            db_path: Arc::new(db_path),
        })
    }

    pub fn path(&self) -> &Path {
        self.db_path.as_path()
    }

    async fn execute<F, T>(&self, task: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sender = self.inner.sender.clone();
        let (reply_tx, reply_rx) = oneshot::channel();

        let command = KvCommand::Execute(Box::new(move |conn| {
            let result = task(conn);
            if reply_tx.send(result).is_err() {
                error!("Storage caller dropped before receiving result");
            }
        }));

        sender
            .send(command)
            .map_err(|err| anyhow!("failed to send command to storage thread: {err}"))?;

        reply_rx
            .await
            .map_err(|_| anyhow!("storage thread terminated unexpectedly"))?
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let key = key.to_string();
        self.execute(move |conn| {
            conn.query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .with_context(|| "failed to read key")
        })
        .await
    }

    pub async fn put(&self, key: &str, value: String) -> Result<()> {
        let key = key.to_string();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .with_context(|| "failed to write key")?;
            Ok(())
        })
        .await
    }

    pub async fn delete(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.execute(move |conn| {
            conn.execute("DELETE FROM kv WHERE key = ?1", params![key])
                .with_context(|| "failed to delete key")?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn put_get_roundtrip_and_overwrite() {
        let dir = TempDir::new().unwrap();
        let store = KvStore::new(dir.path().join("anker.sqlite3")).unwrap();

        assert_eq!(store.get("missing").await.unwrap(), None);

        store.put("k", "v1".into()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v1"));

        store.put("k", "v2".into()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));

        store.delete("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn reopen_preserves_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("anker.sqlite3");

        {
            let store = KvStore::new(path.clone()).unwrap();
            store.put("quote", "{}".into()).await.unwrap();
        }

        let store = KvStore::new(path).unwrap();
        assert_eq!(store.get("quote").await.unwrap().as_deref(), Some("{}"));
    }
}
