use crate::document::Region;
use futures::future::{AbortHandle, Abortable};
use std::{
    collections::HashMap,
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
};
use tokio::sync::Mutex;

///Keeps at most one refresh in flight per region.
///
///Starting a refresh aborts whatever refresh was already running for the same region, so a slow
///response can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct Refresher {
    in_flight: Mutex<HashMap<Region, (u64, AbortHandle)>>,
    next_generation: AtomicU64,
}

impl Refresher {
    ///Runs `refresh` to completion unless a newer refresh for `region` starts first, in which
    ///case `None` is returned and `refresh` is dropped at its next await point.
    pub async fn run<F: Future>(&self, region: Region, refresh: F) -> Option<F::Output> {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let (handle, registration) = AbortHandle::new_pair();

        if let Some((_, previous)) = self
            .in_flight
            .lock()
            .await
            .insert(region, (generation, handle))
        {
            previous.abort();
        }

        let result = Abortable::new(refresh, registration).await.ok();

        let mut in_flight = self.in_flight.lock().await;
        if in_flight
            .get(&region)
            .is_some_and(|(current, _)| *current == generation)
        {
            in_flight.remove(&region);
        }

        if result.is_none() {
            debug!(?region, generation, "Refresh superseded");
        }
        result
    }

    #[cfg(test)]
    pub async fn in_flight(&self) -> usize {
        self.in_flight.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, time::Duration};
    use tokio::sync::Notify;

    #[tokio::test]
    async fn a_newer_refresh_aborts_the_older_one() {
        let refresher = Arc::new(Refresher::default());
        let release = Arc::new(Notify::new());

        let slow = {
            let refresher = refresher.clone();
            let release = release.clone();
            tokio::spawn(async move {
                refresher
                    .run(Region::StudentsTable, async move {
                        release.notified().await;
                        "slow"
                    })
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        let fast = refresher
            .run(Region::StudentsTable, async { "fast" })
            .await;
        release.notify_waiters();

        assert_eq!(fast, Some("fast"));
        assert_eq!(slow.await.unwrap(), None);
        assert_eq!(refresher.in_flight().await, 0);
    }

    #[tokio::test]
    async fn different_regions_do_not_interfere() {
        let refresher = Refresher::default();

        let (students, rooms) = tokio::join!(
            refresher.run(Region::StudentsTable, async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                1
            }),
            refresher.run(Region::RoomsTable, async { 2 }),
        );

        assert_eq!(students, Some(1));
        assert_eq!(rooms, Some(2));
    }
}
