//! Persistence backends for the event store.
//!
//! A backend holds named text records. Reads return `None` when the record
//! is missing or unreadable; writes are best effort and never fail the
//! caller. Backends log their own failures.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub trait Storage {
    /// Current value of the record, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the record with `value`.
    fn write(&self, key: &str, value: &str);
}

/// Storage for environments without anywhere durable to write.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStorage;

impl Storage for NoopStorage {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, key: &str, _value: &str) {
        log::debug!("No persistent storage, dropping write to '{}'", key);
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) {
        (**self).write(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_forgets_everything() {
        let storage = NoopStorage;
        storage.write("events", "{}");
        assert_eq!(storage.read("events"), None);
    }

    #[test]
    fn boxed_storage_delegates() {
        let memory = MemoryStorage::default();
        let boxed: Box<dyn Storage> = Box::new(memory.clone());
        boxed.write("events", "{}");
        assert_eq!(memory.read("events").as_deref(), Some("{}"));
    }
}
