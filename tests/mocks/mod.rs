pub mod review_backend_mock;
