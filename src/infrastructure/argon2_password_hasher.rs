use argon2::{
    Algorithm, Argon2, Params, PasswordHash as Argon2Hash, Version,
    password_hash::{
        Error as PasswordHashError, PasswordHasher as Argon2Hasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};

use crate::domain::{
    error::DomainError,
    models::credential::HashedPassword,
    services::password_service::PasswordHasher,
};

/// Argon2id hasher. The cost parameters only affect new hashes; verification
/// always uses the parameters embedded in the stored hash.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    /// Build a hasher with an explicit work factor.
    pub fn with_cost(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, argon2::Error> {
        let params = Params::new(memory_kib, iterations, parallelism, None)?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(plain_password.as_bytes(), &salt)
            .map_err(|e| DomainError::EncodingError(e.to_string()))?
            .to_string();

        Ok(HashedPassword::new(hash))
    }

    fn verify(&self, plain_password: &str, hashed_password: &HashedPassword) -> Result<bool, DomainError> {
        let parsed_hash = Argon2Hash::new(hashed_password.as_str())
            .map_err(|e| DomainError::InvalidHashFormat(e.to_string()))?;

        // a PHC string may parse without carrying a salt or an output to compare
        if parsed_hash.salt.is_none() || parsed_hash.hash.is_none() {
            return Err(DomainError::InvalidHashFormat(
                "missing salt or hash output".to_string(),
            ));
        }

        match self
            .argon2()
            .verify_password(plain_password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(DomainError::InvalidHashFormat(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[fixture]
    fn hasher() -> Argon2PasswordHasher {
        // minimum cost keeps the suite fast
        Argon2PasswordHasher::with_cost(8, 1, 1).unwrap()
    }

    #[rstest]
    #[case("secret1")]
    #[case("")]
    #[case("pässwörd with spaces")]
    #[case("パスワード🔑")]
    fn hash_then_verify_succeeds(hasher: Argon2PasswordHasher, #[case] password: &str) {
        let hash = hasher.hash(password).unwrap();

        assert_ne!(hash.as_str(), password);
        assert!(hash.as_str().starts_with("$argon2id$"));
        assert!(hasher.verify(password, &hash).unwrap());
    }

    #[rstest]
    fn verify_rejects_different_password(hasher: Argon2PasswordHasher) {
        let hash = hasher.hash("secret1").unwrap();

        assert!(!hasher.verify("wrong", &hash).unwrap());
        assert!(!hasher.verify("secret2", &hash).unwrap());
    }

    #[rstest]
    fn hash_is_salted(hasher: Argon2PasswordHasher) {
        let first = hasher.hash("secret1").unwrap();
        let second = hasher.hash("secret1").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("secret1", &first).unwrap());
        assert!(hasher.verify("secret1", &second).unwrap());
    }

    #[rstest]
    fn hash_embeds_work_factor(hasher: Argon2PasswordHasher) {
        let hash = hasher.hash("secret1").unwrap();
        assert!(hash.as_str().contains("m=8,t=1,p=1"));
    }

    #[rstest]
    fn verify_uses_parameters_from_stored_hash(hasher: Argon2PasswordHasher) {
        let stronger = Argon2PasswordHasher::with_cost(16, 2, 1).unwrap();
        let hash = stronger.hash("secret1").unwrap();

        assert!(hasher.verify("secret1", &hash).unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("plaintext")]
    #[case("$argon2id$v=19$broken")]
    #[case("$argon2id$v=19$m=8,t=1,p=1")]
    #[case("$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ")]
    fn verify_signals_malformed_hash(hasher: Argon2PasswordHasher, #[case] stored: &str) {
        let result = hasher.verify("secret1", &HashedPassword::new(stored.to_string()));
        assert!(matches!(result, Err(DomainError::InvalidHashFormat(_))));
    }

    #[test]
    fn with_cost_rejects_invalid_parameters() {
        assert!(Argon2PasswordHasher::with_cost(8, 0, 1).is_err());
    }
}
