use integration_tests::harness::TestServer;
use mediaway_core::server::reload_runtime_state;
use reqwest::{Method, StatusCode};
use uuid::Uuid;

#[test]
fn reload_swaps_in_new_library_entries() {
    let srv = TestServer::start();
    let show_id = Uuid::new_v4();
    let path = format!("/upnp/tvshows/{show_id}/Heat.mkv");

    let before = srv.request(Method::GET, &path).send().unwrap();
    assert_eq!(before.status(), StatusCode::BAD_REQUEST);

    srv.fixture
        .write_library(&[(show_id, srv.fixture.movie_root())]);

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(reload_runtime_state(&srv.fixture.config_dir(), &srv.state))
        .expect("reload failed");

    let after = srv.request(Method::GET, &path).send().unwrap();
    assert_eq!(after.status(), StatusCode::OK);
}

#[test]
fn failed_reload_keeps_previous_library() {
    let srv = TestServer::start();
    let url = srv.movie_url("Heat.mkv");

    std::fs::write(srv.fixture.config_dir().join("library.hcl"), "movies = [ { id = ").unwrap();

    let rt = tokio::runtime::Runtime::new().unwrap();
    let result = rt.block_on(reload_runtime_state(&srv.fixture.config_dir(), &srv.state));
    assert!(result.is_err());

    let res = srv.get(url).send().unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
