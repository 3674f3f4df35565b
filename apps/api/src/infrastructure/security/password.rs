use crate::domain::shared::errors::DomainError;

/// Hashes on the blocking pool.
pub async fn hash_password(password: String, cost: u32) -> Result<String, DomainError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::InfrastructureError(format!("Hashing task failed: {}", e)))?
        .map_err(|e| DomainError::InfrastructureError(format!("Password hashing failed: {}", e)))
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, DomainError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| DomainError::InfrastructureError(format!("Verification task failed: {}", e)))?
        .map_err(|e| {
            DomainError::InfrastructureError(format!("Password verification failed: {}", e))
        })
}
