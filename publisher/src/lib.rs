//! # Crate publisher
//!
//! ## publisher
//!
//! The `publisher` crate provides a mechanism for registering and notifying
//! listeners of new events of type `T`.
//!
//! Listeners are registered dynamically and every registered listener
//! receives each published event, in registration order. Delivery is awaited
//! listener by listener, so a consumer never observes events out of the
//! order they were published in.
//!
//! ### Example
//!
//! ```ignore
//! let publisher = Publisher::new();
//!
//! // Register a listener
//! let mut listener = Listener::new(|_id, data: Arc<String>| async move {
//!     println!("Listener received: {}", data);
//! });
//! let listener_id = publisher.register_listener(&mut listener);
//!
//! // Notify all listeners
//! publisher.notify_listeners(Arc::new("Hello, World!".to_string())).await;
//!
//! // Unregister the listener
//! publisher.unregister_listener(listener_id).expect("Failed to unregister listener");
//! assert!(publisher.is_empty());
//! ```

pub mod listener;
mod macros;
pub mod publisher;

pub use crate::listener::Listener;
pub use crate::publisher::{Publishable, Publisher};

#[derive(PartialEq, Clone, Debug)]
pub enum PublisherError {
    ListenerNotFound(String),
}
