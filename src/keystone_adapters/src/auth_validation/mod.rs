pub mod jwt_session_codec;
pub mod session_cookie;
pub mod session_gate;

pub use jwt_session_codec::JwtSessionCodec;
pub use session_cookie::SessionCookie;
pub use session_gate::{SessionError, SessionGate};
