mod config;

pub use config::{Config, ConfigError};

#[cfg(test)]
pub(crate) mod tests {
    use super::Config;
    use std::sync::{Mutex, MutexGuard};

    static GLOBAL_CONFIG_LOCK: Mutex<()> = Mutex::new(());

    /// Exclusive use of the global config for one test. Resets it on drop.
    pub struct GlobalConfigGuard {
        _lock: MutexGuard<'static, ()>,
    }

    impl Drop for GlobalConfigGuard {
        fn drop(&mut self) {
            Config::reset();
        }
    }

    pub fn lock_global_config() -> GlobalConfigGuard {
        let lock = GLOBAL_CONFIG_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Config::reset();
        GlobalConfigGuard { _lock: lock }
    }
}
