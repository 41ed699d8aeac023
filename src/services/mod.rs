pub mod mock_token_verifier;
pub mod remote_token_verifier;

pub use mock_token_verifier::*;
pub use remote_token_verifier::*;
