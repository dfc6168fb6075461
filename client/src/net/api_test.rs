use super::*;

#[test]
fn status_accepted_any_2xx_without_expectation() {
    assert!(status_accepted(200, None));
    assert!(status_accepted(201, None));
    assert!(status_accepted(204, None));
    assert!(!status_accepted(199, None));
    assert!(!status_accepted(301, None));
    assert!(!status_accepted(404, None));
    assert!(!status_accepted(500, None));
}

#[test]
fn status_accepted_exact_when_expected() {
    assert!(status_accepted(CREATED, Some(CREATED)));
    assert!(!status_accepted(200, Some(CREATED)));
    assert!(!status_accepted(204, Some(CREATED)));
}

#[cfg(not(feature = "hydrate"))]
mod off_browser {
    use super::*;

    use futures::executor::block_on;

    #[test]
    fn calls_are_unavailable_on_server() {
        let config = ApiConfig::new("http://localhost:5000");
        let session = Session::default();
        assert_eq!(
            block_on(fetch_all_tasks(&config, &session)),
            Err(ApiError::Unavailable)
        );
        assert_eq!(block_on(login(&config, "a", "b")), Err(ApiError::Unavailable));
        assert_eq!(
            block_on(delete_task(&config, &session, "t1")),
            Err(ApiError::Unavailable)
        );
    }
}
