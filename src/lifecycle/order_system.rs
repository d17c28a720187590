use crate::clients::OrderClient;
use crate::config::AppConfig;
use crate::storage::{create_storage, StorageError, StorageInterface};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the order store.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the Order actor
/// - **Dependency Wiring**: Handing the configured storage backend to the actor
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(Arc::new(MemoryStorage::new()), 32);
///
/// let order_id = system.order_client.create_order(draft).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl OrderSystem {
    /// Spawns the Order actor over `storage`.
    ///
    /// Must be called from within a Tokio runtime. The snapshot is restored
    /// by the actor before it serves the first request, so callers can issue
    /// requests immediately.
    pub fn new(storage: Arc<dyn StorageInterface>, buffer_size: usize) -> Self {
        let (order_actor, order_client) = crate::order_actor::new(buffer_size, storage);
        let handle = tokio::spawn(order_actor.run(()));

        Self {
            order_client,
            handle,
        }
    }

    /// Builds the configured storage backend and spawns the actor over it.
    pub fn from_config(config: &AppConfig) -> Result<Self, StorageError> {
        let storage = create_storage(&config.storage)?;
        info!(storage = ?config.storage, buffer_size = config.actor.buffer_size, "Starting order system");
        Ok(Self::new(storage, config.actor.buffer_size))
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the system's client, which closes the channel once every clone
    /// handed out is gone too, then waits for the actor task to finish.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;

    #[tokio::test]
    async fn test_from_config_memory_backend() {
        let config = AppConfig {
            storage: StorageConfig::Memory,
            ..AppConfig::default()
        };
        let system = OrderSystem::from_config(&config).unwrap();
        assert!(system.order_client.orders().await.unwrap().is_empty());
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_from_config_rejects_empty_path() {
        let config = AppConfig {
            storage: StorageConfig::File {
                path: Default::default(),
            },
            ..AppConfig::default()
        };
        assert!(OrderSystem::from_config(&config).is_err());
    }
}
