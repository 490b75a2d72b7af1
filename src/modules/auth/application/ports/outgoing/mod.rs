pub mod identity_verifier;
pub mod token_provider;
