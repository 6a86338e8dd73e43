use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use motion_common::traits::Notifiable;
use motion_common::types::Callback;

use crate::PublisherError;

#[async_trait::async_trait]
pub trait Publishable<T> {
    fn register_listener(&self, listener: &mut dyn Notifiable<T>) -> Uuid;
    fn unregister_listener(&self, listener_id: Uuid) -> Result<(), PublisherError>;
    fn unregister_all(&self);
    async fn notify_listeners(&self, data: Arc<T>);
}

/// Record of registered listeners that will be notified of updates.
#[derive(Clone, Default)]
pub struct Publisher<T> {
    listeners: Arc<DashMap<Uuid, (usize, Callback<T>)>>,
    next_seq: Arc<AtomicUsize>,
}

impl<T> Publisher<T> {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(DashMap::new()),
            next_seq: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}

#[async_trait::async_trait]
impl<T> Publishable<T> for Publisher<T>
where
    T: Send + Sync + 'static,
{
    /// Registers a listener callback to be notified of updates.
    /// Returns the id assigned to the listener.
    fn register_listener(&self, listener: &mut dyn Notifiable<T>) -> Uuid {
        let callback = listener.get_callback();
        let listener_id = Uuid::new_v4();
        listener.set_id(listener_id);
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.listeners.insert(listener_id, (seq, callback));
        log::debug!("registered listener {}", listener_id);
        listener_id
    }

    /// Unregisters a listener callback with a given id.
    /// Returns `PublisherError::ListenerNotFound` if no id matches any of the
    /// registered listeners.
    fn unregister_listener(&self, listener_id: Uuid) -> Result<(), PublisherError> {
        if self.listeners.remove(&listener_id).is_none() {
            return Err(PublisherError::ListenerNotFound(format!(
                "Listener with id {} not found",
                listener_id
            )));
        }
        log::debug!("unregistered listener {}", listener_id);
        Ok(())
    }

    fn unregister_all(&self) {
        self.listeners.clear();
    }

    /// Calls each registered listener with the provided data, awaiting them
    /// one by one in registration order.
    async fn notify_listeners(&self, data: Arc<T>) {
        let mut listeners: Vec<(usize, Uuid, Callback<T>)> = self
            .listeners
            .iter()
            .map(|entry| (entry.value().0, *entry.key(), entry.value().1.clone()))
            .collect();
        listeners.sort_by_key(|(seq, _, _)| *seq);

        for (_, id, callback) in listeners {
            callback(id, data.clone()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{listener, listener::Listener};
    use std::sync::Mutex;

    struct TestHandler {
        data: Arc<Mutex<i32>>,
    }

    impl TestHandler {
        fn new() -> Self {
            Self {
                data: Arc::new(Mutex::new(0)),
            }
        }

        async fn handle(&self, _id: Uuid, value: Arc<i32>) {
            let mut data = self.data.lock().unwrap();
            *data = *value;
        }
    }

    #[tokio::test]
    async fn test_register_and_notify_listener() {
        let publisher = Publisher::new();
        let handler = Arc::new(TestHandler::new());

        let mut listener = Listener::new({
            let handler = handler.clone();
            move |id: Uuid, value| {
                let handler = handler.clone();
                async move {
                    handler.handle(id, value).await;
                }
            }
        });

        let _listener_id = publisher.register_listener(&mut listener);
        publisher.notify_listeners(Arc::new(42)).await;

        assert_eq!(*handler.data.lock().unwrap(), 42);
    }

    #[tokio::test]
    async fn test_register_and_notify_listener_macro() {
        let publisher = Publisher::new();
        let handler = Arc::new(TestHandler::new());

        let mut listener = listener!(handler.handle);

        let _listener_id = publisher.register_listener(&mut listener);
        publisher.notify_listeners(Arc::new(42)).await;

        assert_eq!(*handler.data.lock().unwrap(), 42);
    }

    #[tokio::test]
    async fn test_unregister_listener() {
        let publisher = Publisher::new();
        let handler = Arc::new(TestHandler::new());

        let mut listener = Listener::new({
            let handler = handler.clone();
            move |id: Uuid, value| {
                let handler = handler.clone();
                async move {
                    handler.handle(id, value).await;
                }
            }
        });

        let listener_id = publisher.register_listener(&mut listener);
        assert_eq!(publisher.len(), 1);
        publisher.unregister_listener(listener_id).unwrap();
        assert!(publisher.is_empty());
        publisher.notify_listeners(Arc::new(100)).await;

        // Should remain unchanged since listener was removed
        assert_eq!(*handler.data.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unregister_unknown_listener() {
        let publisher = Publisher::<i32>::new();
        assert!(publisher.unregister_listener(Uuid::new_v4()).is_err());
    }

    #[tokio::test]
    async fn test_notify_preserves_registration_order() {
        let publisher = Publisher::new();
        let order: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));

        let mut listeners = Vec::new();
        for i in 0..4 {
            let order = order.clone();
            listeners.push(Listener::new(move |_id: Uuid, _value: Arc<i32>| {
                let order = order.clone();
                async move {
                    order.lock().unwrap().push(i);
                }
            }));
        }
        for listener in listeners.iter_mut() {
            publisher.register_listener(listener);
        }

        publisher.notify_listeners(Arc::new(7)).await;

        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3]);
    }
}
