use crate::harness::fixture::MediaFixture;
use crate::harness::{CapturedEvent, init_test_tracing};
use arc_swap::ArcSwap;
use mediaway_core::conf::load_config;
use mediaway_core::library::Collection;
use mediaway_core::media::stream_url;
use mediaway_core::server::{RuntimeState, build_pingora_server, build_runtime_state};
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use std::net::TcpStream;
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;
use std::time::{Duration, Instant};
use url::Url;

/// Handle to a running media server backed by its own fixture library.
pub struct TestServer {
    base_url: String,
    client: Client,
    prefix: String,
    pub fixture: MediaFixture,
    pub state: Arc<ArcSwap<RuntimeState>>,
}

impl TestServer {
    /// Start a server on a free port with a freshly generated fixture library.
    ///
    /// Every call gets its own port, temp dir and movie id, so tests run in parallel.
    pub fn start() -> Self {
        // Initialize tracing (this must happen first).
        init_test_tracing(events());

        let listen_port = free_port();
        let fixture = MediaFixture::new(listen_port);

        let cfg = load_config(&fixture.config_dir()).expect("failed to load fixture config");
        let prefix = cfg.server.prefix.clone();

        // Wrap in ArcSwap (matches production shape)
        let state = Arc::new(ArcSwap::from_pointee(build_runtime_state(&cfg)));

        let server =
            build_pingora_server(&cfg, state.clone()).expect("failed to build media server");

        thread::spawn(move || {
            server.run_forever();
        });

        let base_url = format!("http://127.0.0.1:{listen_port}");
        wait_for_server(&base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .expect("failed to build client");

        Self {
            base_url,
            client,
            prefix,
            fixture,
            state,
        }
    }

    /// Absolute stream URL for a file below the fixture movie.
    pub fn movie_url(&self, relative: &str) -> Url {
        let base = Url::parse(&self.base_url).unwrap();
        stream_url(
            &base,
            &self.prefix,
            Collection::Movies,
            self.fixture.movie_id,
            relative,
        )
        .unwrap()
    }

    /// Request a raw path, bypassing URL building. The path is sent as-is.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }

    pub fn get(&self, url: Url) -> RequestBuilder {
        self.client.get(url)
    }

    pub fn head(&self, url: Url) -> RequestBuilder {
        self.client.head(url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All captured events. Shared by every test in the process.
    pub fn events(&self) -> Vec<CapturedEvent> {
        events().lock().unwrap().clone()
    }
}

/// Poll until the server responds (or panic).
fn wait_for_server(listen_addr: &str) {
    let addr = listen_addr.strip_prefix("http://").unwrap_or(listen_addr);

    let deadline = Instant::now() + Duration::from_secs(2);

    loop {
        match TcpStream::connect(addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("server failed to start at {}", listen_addr);
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

static EVENTS: OnceLock<Arc<Mutex<Vec<CapturedEvent>>>> = OnceLock::new();

fn events() -> Arc<Mutex<Vec<CapturedEvent>>> {
    EVENTS
        .get_or_init(|| Arc::new(Mutex::new(Vec::new())))
        .clone()
}

/// Allocate a free port on localhost.
/// This is required to avoid port collisions when running tests in parallel.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
