use super::{DbHandle, MemoryDb};
use crate::errors::StorageError;
use goalplan_core::Result;
use log::{debug, warn};
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// Type alias for the job to be executed by the writer actor.
type Job<T> = Box<dyn FnOnce(&mut MemoryDb) -> Result<T> + Send + 'static>;

type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    // Each job is a boxed closure; the reply comes back over a oneshot.
    // Box<dyn Any + Send> erases the job's return type.
    tx: mpsc::Sender<(Job<Box<dyn Any + Send + 'static>>, ErasedReply)>,
}

impl WriteHandle {
    /// Executes a job against the database on the writer actor.
    ///
    /// The job sees the database exclusively. Nothing is rolled back on
    /// `Err`, so a job must finish every fallible step before it mutates.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut MemoryDb) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |db| job(db).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| StorageError::WriterStopped)?;

        let boxed = ret_rx.await.map_err(|_| StorageError::ReplyDropped)??;
        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| StorageError::ResultTypeMismatch.into())
    }
}

/// Spawns a background Tokio task that acts as the single writer to the
/// database. Jobs are processed one at a time, in arrival order.
pub fn spawn_writer(db: DbHandle) -> WriteHandle {
    // Bounded channel; 1024 pending writes is plenty for one process.
    let (tx, mut rx) =
        mpsc::channel::<(Job<Box<dyn Any + Send + 'static>>, ErasedReply)>(1024);

    tokio::spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let result = run_job(&db, job);
            // Receiver may have gone away (request timed out or was cancelled).
            let _ = reply_tx.send(result);
        }
        debug!("All write handles dropped, writer actor stopping");
    });

    WriteHandle { tx }
}

fn run_job(
    db: &DbHandle,
    job: Job<Box<dyn Any + Send + 'static>>,
) -> Result<Box<dyn Any + Send + 'static>> {
    let mut guard = db.write().map_err(StorageError::from)?;
    let result = job(&mut *guard);
    if let Err(e) = &result {
        warn!("Write job failed: {}", e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init, read};
    use goalplan_core::errors::{Error, ValidationError};

    #[tokio::test]
    async fn test_exec_returns_job_value() {
        let db = init();
        let writer = spawn_writer(db.clone());

        let id = writer.exec(|db| Ok(db.next_goal_id())).await.unwrap();
        assert_eq!(id, 1);
        let id = writer.exec(|db| Ok(db.next_goal_id())).await.unwrap();
        assert_eq!(id, 2);
    }

    #[tokio::test]
    async fn test_failed_job_reports_error_and_writer_keeps_running() {
        let db = init();
        let writer = spawn_writer(db.clone());

        let result: Result<()> = writer
            .exec(|_db| {
                Err(Error::Validation(ValidationError::MissingField(
                    "name".to_string(),
                )))
            })
            .await;
        assert!(result.is_err());

        let next = writer.exec(|db| Ok(db.next_asset_id())).await.unwrap();
        assert_eq!(next, 1);
        assert_eq!(read(&db, |db| Ok(db.assets.len())).unwrap(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_jobs_are_serialized() {
        let db = init();
        let writer = spawn_writer(db.clone());

        let mut handles = Vec::new();
        for _ in 0..50 {
            let writer = writer.clone();
            handles.push(tokio::spawn(async move {
                writer.exec(|db| Ok(db.next_goal_id())).await.unwrap()
            }));
        }
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=50).collect::<Vec<i64>>());
    }
}
