mod fixture;
pub mod server;
pub mod tracing;

pub use fixture::{MEDIA_LEN, MediaFixture, media_bytes};
pub use server::TestServer;
pub use self::tracing::{CapturedEvent, init_test_tracing};
