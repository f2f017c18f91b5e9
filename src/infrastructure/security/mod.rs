// src/infrastructure/security/mod.rs
pub mod firebase;
pub mod password;
pub mod token;

pub use firebase::FirebaseTokenVerifier;
pub use password::Argon2PasswordHasher;
pub use token::JwtTokenManager;
