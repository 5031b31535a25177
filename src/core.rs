//! Core Storefront functionality
//!
//! This module contains the main Storefront struct and its implementation,
//! providing centralized coordination for the connection pool and the
//! registered repositories.

use sqlx::PgPool;
use std::collections::HashMap;
use std::time::Duration;
use store_model::Repository;

use crate::errors::StorefrontError;
use config::DatabaseConfig;

/// Main Storefront coordinator that manages the database connection and
/// table repositories
pub struct Storefront {
    pool: PgPool,
    repositories: HashMap<String, Box<dyn std::any::Any + Send + Sync>>,
}

impl Storefront {
    /// Create new Storefront with database connection
    pub async fn new(config: DatabaseConfig) -> Result<Self, StorefrontError> {
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;

        Ok(Self {
            pool,
            repositories: HashMap::new(),
        })
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Register a repository with a given name
    pub fn register_repository<T>(&mut self, name: String, repository: T) -> Result<(), StorefrontError>
    where
        T: Repository + 'static,
    {
        if self.repositories.contains_key(&name) {
            return Err(StorefrontError::RepositoryAlreadyRegistered(name));
        }

        self.repositories.insert(name, Box::new(repository));
        Ok(())
    }

    /// Get a registered repository by name
    pub fn get_repository<T>(&self, name: &str) -> Result<&T, StorefrontError>
    where
        T: Repository + 'static,
    {
        self.repositories
            .get(name)
            .and_then(|repository| repository.downcast_ref::<T>())
            .ok_or_else(|| StorefrontError::RepositoryNotFound(name.to_string()))
    }

    /// Get a mutable reference to a registered repository by name
    pub fn get_repository_mut<T>(&mut self, name: &str) -> Result<&mut T, StorefrontError>
    where
        T: Repository + 'static,
    {
        self.repositories
            .get_mut(name)
            .and_then(|repository| repository.downcast_mut::<T>())
            .ok_or_else(|| StorefrontError::RepositoryNotFound(name.to_string()))
    }

    /// List all registered repository names
    pub fn list_repositories(&self) -> Vec<&String> {
        self.repositories.keys().collect()
    }

    /// Remove a repository by name
    pub fn unregister_repository(&mut self, name: &str) -> Result<(), StorefrontError> {
        self.repositories
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StorefrontError::RepositoryNotFound(name.to_string()))
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), StorefrontError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
