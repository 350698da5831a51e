use std::sync::Arc;
use parking_lot::RwLock;
use crate::memory::low_memory::LowMemoryConfig;
use crate::core::error::Result;

/// Adaptive memory management based on pressure
pub struct AdaptiveManager {
    pub config: LowMemoryConfig,
    pub cache_sizes: Arc<RwLock<CacheSizes>>,
    pub eviction_policy: EvictionPolicy,
    pub pressure_callbacks: Vec<Box<dyn Fn() + Send + Sync>>,
}

#[derive(Debug, Clone)]
pub struct CacheSizes {
    pub page_cache: usize,
    pub query_cache: usize,
    pub buffer_pool: usize,
}

#[derive(Debug, Clone, Copy)]
pub enum EvictionPolicy {
    LRU,
    LFU,
    FIFO,
    Adaptive,
}

impl AdaptiveManager {
    pub fn new(config: LowMemoryConfig) -> Self {
        AdaptiveManager {
            config,
            cache_sizes: Arc::new(RwLock::new(CacheSizes {
                page_cache: 2 * 1024 * 1024,
                query_cache: 1024 * 1024,
                buffer_pool: 2 * 1024 * 1024,
            })),
            eviction_policy: EvictionPolicy::Adaptive,
            pressure_callbacks: Vec::new(),
        }
    }

    /// Adapt cache sizes based on memory pressure
    pub fn adapt_caches(&mut self, pressure: f32) {
        let mut sizes = self.cache_sizes.write();

        if pressure > 0.9 {
            // Critical pressure - minimal caches
            sizes.page_cache = 512 * 1024;
            sizes.query_cache = 0;
            sizes.buffer_pool = 512 * 1024;
        } else if pressure > 0.7 {
            // High pressure - reduce caches
            sizes.page_cache = 1024 * 1024;
            sizes.query_cache = 512 * 1024;
            sizes.buffer_pool = 1024 * 1024;
        } else {
            // Normal pressure
            sizes.page_cache = 2 * 1024 * 1024;
            sizes.query_cache = 1024 * 1024;
            sizes.buffer_pool = 2 * 1024 * 1024;
        }

        // Notify components
        for callback in &self.pressure_callbacks {
            callback();
        }
    }

    /// Clear all caches
    pub fn clear_caches(&mut self) {
        // Implementation would clear actual caches
        println!("Clearing all caches due to memory pressure");
    }

    /// Flush buffers to disk
    pub fn flush_buffers(&mut self) -> Result<()> {
        // Implementation would flush actual buffers
        println!("Flushing buffers to disk");
        Ok(())
    }

    /// Get recommended batch size
    pub fn get_batch_size(&self, pressure: f32) -> usize {
        if pressure > 0.8 {
            10  // Very small batches
        } else if pressure > 0.6 {
            50
        } else {
            self.config.batch_size
        }
    }
}