mod etag_tests;
mod test_helpers;
