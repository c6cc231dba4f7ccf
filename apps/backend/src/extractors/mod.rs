pub mod jwt;
pub mod validated_json;

pub use jwt::JwtClaims;
pub use validated_json::ValidatedJson;
